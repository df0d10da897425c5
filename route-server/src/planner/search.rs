//! Minimum-boarding route search.
//!
//! Explores an implicit graph whose nodes are (train, station) pairs. Two
//! edge kinds exist: riding the current train to any strictly-later stop
//! (free), and switching to another train at the current station (costs one
//! boarding). A deque keeps the frontier in 0-1 BFS order — ride targets go
//! to the front, switches to the back — so the first time the destination is
//! dequeued, its boarding count is minimal.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, error, trace};

use crate::domain::{Hop, Route, StationCode, TrainNo};
use crate::network::NetworkIndex;

/// A candidate journey awaiting expansion.
///
/// Each state owns its hop path outright; branching clones it. Paths are
/// never shared between frontier entries.
#[derive(Debug, Clone)]
struct SearchState {
    /// Train currently being ridden.
    train: TrainNo,

    /// Station the path has reached.
    station: StationCode,

    /// The (train, station) hops taken from the source to here.
    hops: Vec<Hop>,

    /// Distinct trains boarded so far. The first boarding counts as 1.
    trains_boarded: usize,
}

/// Find a route between two stations boarding the fewest trains.
///
/// Returns the route decomposed into maximal same-train legs, or `None` when
/// no sequence of trains connects the stations — an ordinary negative
/// outcome, including the case where either code is absent from the index.
///
/// Asking for a route from a station to itself returns the trivial route
/// (zero trains, no legs) without searching.
pub fn find_route(
    index: &NetworkIndex,
    source: &StationCode,
    destination: &StationCode,
) -> Option<Route> {
    if source == destination {
        return Some(Route::trivial());
    }

    // Visitation is global across the whole search, not per change level:
    // a station reached once by riding is never re-entered, and a train
    // boarded once is never boarded again elsewhere.
    let mut visited_trains: HashSet<TrainNo> = HashSet::new();
    let mut visited_stations: HashSet<StationCode> = HashSet::new();

    let mut frontier: VecDeque<SearchState> = VecDeque::new();

    for train in index.trains_at(source) {
        frontier.push_back(SearchState {
            train: train.clone(),
            station: source.clone(),
            hops: vec![Hop::new(train.clone(), source.clone())],
            trains_boarded: 1,
        });
    }

    let mut expanded = 0usize;

    while let Some(state) = frontier.pop_front() {
        expanded += 1;

        if state.station == *destination {
            debug!(
                source = %source,
                destination = %destination,
                trains = state.trains_boarded,
                expanded,
                "route found"
            );
            // The path is hop-contiguous by construction, so the collapse
            // cannot fail; a failure here is a bug in expansion, not an
            // ordinary no-route outcome, and must not pass silently.
            return Route::from_hops(&state.hops, state.trains_boarded)
                .inspect_err(|e| error!(error = %e, "winning path failed to collapse"))
                .ok();
        }

        visited_trains.insert(state.train.clone());
        visited_stations.insert(state.station.clone());

        trace!(
            train = %state.train,
            station = %state.station,
            boarded = state.trains_boarded,
            "expanding"
        );

        // Ride edges: every strictly-later stop of the current train is one
        // free step away. Pushed to the front so same-train reachability is
        // exhausted before any switch at this boarding count.
        let stops = index.stops(&state.train);
        if let Some(pos) = stops.iter().position(|s| *s == state.station) {
            for next_station in &stops[pos + 1..] {
                if visited_stations.contains(next_station) {
                    continue;
                }
                visited_stations.insert(next_station.clone());

                let mut hops = state.hops.clone();
                hops.push(Hop::new(state.train.clone(), next_station.clone()));
                frontier.push_front(SearchState {
                    train: state.train.clone(),
                    station: next_station.clone(),
                    hops,
                    trains_boarded: state.trains_boarded,
                });
            }
        }

        // Switch edges: board a different train at this station. Costs one
        // boarding, so these go to the back of the deque.
        for next_train in index.trains_at(&state.station) {
            if visited_trains.contains(next_train) {
                continue;
            }
            visited_trains.insert(next_train.clone());

            let mut hops = state.hops.clone();
            hops.push(Hop::new(next_train.clone(), state.station.clone()));
            frontier.push_back(SearchState {
                train: next_train.clone(),
                station: state.station.clone(),
                hops,
                trains_boarded: state.trains_boarded + 1,
            });
        }
    }

    debug!(
        source = %source,
        destination = %destination,
        expanded,
        "frontier exhausted, no route"
    );
    None
}
