//! Web layer for the route finder.
//!
//! Provides the station-picker page and the route query endpoint.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
