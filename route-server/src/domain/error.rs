//! Domain error types.

use super::StationCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A route was built from an empty hop path
    #[error("route must contain at least one hop")]
    EmptyRoute,

    /// A train change in the hop path did not happen at a single station
    #[error("discontinuous path: changed trains between {0} and {1}")]
    DiscontinuousPath(StationCode, StationCode),
}
