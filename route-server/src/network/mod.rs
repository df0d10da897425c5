//! Network index built from the schedule table.

mod index;

pub use index::NetworkIndex;
