//! Route leg type.

use super::{StationCode, TrainNo};

/// A leg of a route: one train ridden from a boarding station to an
/// alighting station.
///
/// Legs are maximal: consecutive hops on the same train are collapsed into a
/// single leg by [`Route::from_hops`], so two adjacent legs always name
/// different trains and share their boundary station.
///
/// [`Route::from_hops`]: super::Route::from_hops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    /// The train ridden for this leg.
    pub train: TrainNo,

    /// Station where the train is boarded.
    pub from: StationCode,

    /// Station where the train is left.
    pub to: StationCode,
}

impl RouteLeg {
    /// Create a new leg.
    pub fn new(train: TrainNo, from: StationCode, to: StationCode) -> Self {
        Self { train, from, to }
    }
}
