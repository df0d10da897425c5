//! Display-name directories for stations and trains.
//!
//! Presentation-only: the search algorithm never consults these. They map
//! codes back to human-readable names and feed the station dropdown.

use std::collections::HashMap;

use crate::domain::{StationCode, TrainNo};

use super::loader::{ScheduleEntry, TrainInfoEntry};

/// A station offered in the dropdown: code plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationOption {
    pub code: StationCode,
    pub name: String,
}

/// Station code → display name lookup.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: HashMap<StationCode, String>,
}

impl StationDirectory {
    /// Build the directory from schedule entries.
    ///
    /// The first row carrying a name for a station wins; stations that never
    /// carry a name fall back to their code at display time.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut names = HashMap::new();
        for entry in entries {
            if let Some(name) = &entry.station_name {
                names
                    .entry(entry.station.clone())
                    .or_insert_with(|| name.clone());
            }
        }
        Self { names }
    }

    /// Look up a station's display name.
    pub fn name(&self, code: &StationCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Display name, falling back to the code itself when unnamed.
    pub fn name_or_code<'a>(&'a self, code: &'a StationCode) -> &'a str {
        self.name(code).unwrap_or(code.as_str())
    }

    /// All named stations, sorted by display name (then code, for stable
    /// ordering between identically-named stations).
    pub fn options(&self) -> Vec<StationOption> {
        let mut options: Vec<StationOption> = self
            .names
            .iter()
            .map(|(code, name)| StationOption {
                code: code.clone(),
                name: name.clone(),
            })
            .collect();
        options.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
        });
        options
    }

    /// Number of stations with a known name.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no station names are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Train number → display name lookup.
#[derive(Debug, Clone, Default)]
pub struct TrainDirectory {
    names: HashMap<TrainNo, String>,
}

impl TrainDirectory {
    /// Build the directory from train info entries. First name per train wins.
    pub fn from_entries(entries: &[TrainInfoEntry]) -> Self {
        let mut names = HashMap::new();
        for entry in entries {
            names
                .entry(entry.train.clone())
                .or_insert_with(|| entry.name.clone());
        }
        Self { names }
    }

    /// Look up a train's display name.
    pub fn name(&self, train: &TrainNo) -> Option<&str> {
        self.names.get(train).map(String::as_str)
    }

    /// Number of named trains.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no train names are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
