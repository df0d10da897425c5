//! Domain types for the route finder.
//!
//! This module contains the core domain model types that represent
//! validated rail data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod leg;
mod route;
mod station;
mod train;

pub use error::DomainError;
pub use leg::RouteLeg;
pub use route::{Hop, Route};
pub use station::{InvalidStationCode, StationCode};
pub use train::{InvalidTrainNo, TrainNo};
