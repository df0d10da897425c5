//! Route and hop types.
//!
//! The search algorithm records a candidate journey as a flat sequence of
//! [`Hop`]s — one per (train, station) state it passed through. A [`Route`]
//! is the presentable form of the winning path: hops collapsed into maximal
//! same-train [`RouteLeg`]s.

use super::{DomainError, RouteLeg, StationCode, TrainNo};

/// One (train, station) step of a search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// The train being ridden at this point in the path.
    pub train: TrainNo,

    /// The station this hop arrives at (or boards at, for the first hop of
    /// each train).
    pub station: StationCode,
}

impl Hop {
    /// Create a new hop.
    pub fn new(train: TrainNo, station: StationCode) -> Self {
        Self { train, station }
    }
}

/// A complete route between two stations.
///
/// # Invariants
///
/// - `min_trains == legs.len()` for any route produced by a search
///   (boarding the first train counts as 1)
/// - consecutive legs share their boundary station (`legs[i].to ==
///   legs[i + 1].from`)
/// - a trivial route (source equals destination) has `min_trains == 0` and
///   no legs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Number of distinct trains boarded.
    pub min_trains: usize,

    /// The legs of the journey, in travel order.
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// The trivial route from a station to itself: no trains, no legs.
    pub fn trivial() -> Self {
        Self {
            min_trains: 0,
            legs: Vec::new(),
        }
    }

    /// Collapse a hop path into maximal same-train legs.
    ///
    /// Each run of consecutive hops on one train becomes a single leg from
    /// the station where that train was boarded to the last station reached
    /// before the next change (or the end of the path).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path is empty, or if a train change happens
    /// between two different stations (changes must stay put).
    pub fn from_hops(hops: &[Hop], min_trains: usize) -> Result<Self, DomainError> {
        let first = hops.first().ok_or(DomainError::EmptyRoute)?;

        let mut legs = Vec::new();
        let mut leg_train = first.train.clone();
        let mut leg_from = first.station.clone();

        for window in hops.windows(2) {
            let (prev, curr) = (&window[0], &window[1]);
            if curr.train != leg_train {
                if curr.station != prev.station {
                    return Err(DomainError::DiscontinuousPath(
                        prev.station.clone(),
                        curr.station.clone(),
                    ));
                }
                legs.push(RouteLeg::new(leg_train, leg_from, prev.station.clone()));
                leg_train = curr.train.clone();
                leg_from = curr.station.clone();
            }
        }

        let last = hops.last().ok_or(DomainError::EmptyRoute)?;
        legs.push(RouteLeg::new(leg_train, leg_from, last.station.clone()));

        Ok(Self { min_trains, legs })
    }

    /// True if this is the trivial same-station route.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn train(s: &str) -> TrainNo {
        TrainNo::parse(s).unwrap()
    }

    fn hop(t: &str, s: &str) -> Hop {
        Hop::new(train(t), station(s))
    }

    #[test]
    fn trivial_route() {
        let route = Route::trivial();
        assert_eq!(route.min_trains, 0);
        assert!(route.is_trivial());
    }

    #[test]
    fn empty_path_is_an_error() {
        assert!(Route::from_hops(&[], 0).is_err());
    }

    #[test]
    fn single_train_collapses_to_one_leg() {
        let hops = [hop("T1", "A"), hop("T1", "D")];
        let route = Route::from_hops(&hops, 1).unwrap();

        assert_eq!(route.min_trains, 1);
        assert_eq!(
            route.legs,
            vec![RouteLeg::new(train("T1"), station("A"), station("D"))]
        );
    }

    #[test]
    fn change_splits_legs_at_shared_station() {
        let hops = [
            hop("T1", "A"),
            hop("T1", "C"),
            hop("T2", "C"),
            hop("T2", "E"),
        ];
        let route = Route::from_hops(&hops, 2).unwrap();

        assert_eq!(
            route.legs,
            vec![
                RouteLeg::new(train("T1"), station("A"), station("C")),
                RouteLeg::new(train("T2"), station("C"), station("E")),
            ]
        );
    }

    #[test]
    fn intermediate_hops_on_one_train_are_absorbed() {
        let hops = [
            hop("T1", "A"),
            hop("T1", "B"),
            hop("T1", "C"),
            hop("T2", "C"),
            hop("T2", "D"),
            hop("T2", "E"),
        ];
        let route = Route::from_hops(&hops, 2).unwrap();

        assert_eq!(route.legs.len(), 2);
        assert_eq!(route.legs[0].to, station("C"));
        assert_eq!(route.legs[1].from, station("C"));
        assert_eq!(route.legs[1].to, station("E"));
    }

    #[test]
    fn change_at_different_stations_is_rejected() {
        let hops = [hop("T1", "A"), hop("T2", "B")];
        let err = Route::from_hops(&hops, 2).unwrap_err();
        assert!(matches!(err, DomainError::DiscontinuousPath(_, _)));
    }

    #[test]
    fn consecutive_legs_share_boundary_station() {
        let hops = [
            hop("T1", "A"),
            hop("T1", "B"),
            hop("T2", "B"),
            hop("T2", "C"),
            hop("T3", "C"),
            hop("T3", "D"),
        ];
        let route = Route::from_hops(&hops, 3).unwrap();

        assert_eq!(route.legs.len(), 3);
        for pair in route.legs.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}
