//! The network index: the two lookup structures the route search runs over.

use std::collections::{HashMap, HashSet};

use crate::domain::{StationCode, TrainNo};
use crate::schedule::ScheduleEntry;

/// Derived lookup structures over the full schedule.
///
/// Built once at startup and read-only thereafter, so it can be shared
/// across concurrent queries behind an `Arc` without locking.
///
/// Two mappings:
/// - station → set of trains calling there (unordered)
/// - train → its stops in schedule order (the only notion of direction in
///   the network: a train is ridden forward through this sequence, never
///   backward)
#[derive(Debug, Clone, Default)]
pub struct NetworkIndex {
    station_trains: HashMap<StationCode, HashSet<TrainNo>>,
    train_stations: HashMap<TrainNo, Vec<StationCode>>,
}

impl NetworkIndex {
    /// Build the index from schedule entries in one pass.
    ///
    /// Entry order is significant: entries for one train must arrive in stop
    /// order. The source data lists each station once per train; if a
    /// duplicate does slip through, the first occurrence wins.
    pub fn build(entries: impl IntoIterator<Item = ScheduleEntry>) -> Self {
        let mut station_trains: HashMap<StationCode, HashSet<TrainNo>> = HashMap::new();
        let mut train_stations: HashMap<TrainNo, Vec<StationCode>> = HashMap::new();

        for entry in entries {
            station_trains
                .entry(entry.station.clone())
                .or_default()
                .insert(entry.train.clone());

            let stops = train_stations.entry(entry.train).or_default();
            if !stops.contains(&entry.station) {
                stops.push(entry.station);
            }
        }

        Self {
            station_trains,
            train_stations,
        }
    }

    /// All trains calling at a station. Empty for unknown stations.
    pub fn trains_at<'a>(
        &'a self,
        station: &StationCode,
    ) -> impl Iterator<Item = &'a TrainNo> + 'a {
        self.station_trains.get(station).into_iter().flatten()
    }

    /// A train's stops in schedule order. Empty for unknown trains.
    pub fn stops(&self, train: &TrainNo) -> &[StationCode] {
        self.train_stations
            .get(train)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if at least one train calls at this station.
    pub fn knows_station(&self, station: &StationCode) -> bool {
        self.station_trains.contains_key(station)
    }

    /// Number of indexed stations.
    pub fn station_count(&self) -> usize {
        self.station_trains.len()
    }

    /// Number of indexed trains.
    pub fn train_count(&self) -> usize {
        self.train_stations.len()
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

    fn entries(rows: &[(&str, &str)]) -> Vec<ScheduleEntry> {
        rows.iter()
            .map(|(t, s)| ScheduleEntry {
                train: train(t),
                station: station(s),
                station_name: None,
            })
            .collect()
    }

    #[test]
    fn stop_order_is_preserved() {
        let index = NetworkIndex::build(entries(&[
            ("T1", "A"),
            ("T1", "B"),
            ("T1", "C"),
            ("T2", "C"),
            ("T2", "A"),
        ]));

        assert_eq!(
            index.stops(&train("T1")),
            &[station("A"), station("B"), station("C")]
        );
        assert_eq!(index.stops(&train("T2")), &[station("C"), station("A")]);
    }

    #[test]
    fn stations_map_to_all_their_trains() {
        let index = NetworkIndex::build(entries(&[
            ("T1", "A"),
            ("T1", "C"),
            ("T2", "C"),
            ("T2", "D"),
        ]));

        let at_c: HashSet<&TrainNo> = index.trains_at(&station("C")).collect();
        assert_eq!(at_c.len(), 2);
        assert!(at_c.contains(&train("T1")));
        assert!(at_c.contains(&train("T2")));

        assert_eq!(index.trains_at(&station("A")).count(), 1);
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let index = NetworkIndex::build(entries(&[("T1", "A")]));

        assert_eq!(index.trains_at(&station("ZZZ")).count(), 0);
        assert!(index.stops(&train("T9")).is_empty());
        assert!(!index.knows_station(&station("ZZZ")));
        assert!(index.knows_station(&station("A")));
    }

    #[test]
    fn duplicate_stop_keeps_first_position() {
        let index = NetworkIndex::build(entries(&[
            ("T1", "A"),
            ("T1", "B"),
            ("T1", "A"),
            ("T1", "C"),
        ]));

        assert_eq!(
            index.stops(&train("T1")),
            &[station("A"), station("B"), station("C")]
        );
    }

    #[test]
    fn counts() {
        let index = NetworkIndex::build(entries(&[
            ("T1", "A"),
            ("T1", "B"),
            ("T2", "B"),
        ]));

        assert_eq!(index.station_count(), 2);
        assert_eq!(index.train_count(), 2);
    }
}
