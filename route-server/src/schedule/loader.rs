//! CSV loading for the two reference tables.
//!
//! The schedule table lists one row per (train, station) call, ordered per
//! train by stop sequence; the train info table maps train numbers to
//! display names. Rows whose codes fail validation are skipped with a debug
//! log — data quality is not this crate's problem to fix, and a single bad
//! row must not take the whole table down.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{StationCode, TrainNo};

use super::error::ScheduleError;

/// One validated row of the schedule table.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    /// The train making this call.
    pub train: TrainNo,

    /// The station called at.
    pub station: StationCode,

    /// Display name of the station, if the table carries one.
    pub station_name: Option<String>,
}

/// One validated row of the train info table.
#[derive(Debug, Clone)]
pub struct TrainInfoEntry {
    /// The train number.
    pub train: TrainNo,

    /// Display name of the train.
    pub name: String,
}

/// Raw schedule row as it appears in the CSV.
#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    #[serde(rename = "Train_No")]
    train_no: String,
    #[serde(rename = "Station_Code")]
    station_code: String,
    #[serde(rename = "Station_Name")]
    station_name: Option<String>,
}

/// Raw train info row as it appears in the CSV.
#[derive(Debug, Deserialize)]
struct TrainInfoRecord {
    #[serde(rename = "Train_No")]
    train_no: String,
    #[serde(rename = "Train_Name")]
    train_name: String,
}

/// Read schedule entries from any CSV reader.
///
/// Row order is preserved: for each train it defines the direction of
/// travel, so callers must not reorder the result.
pub fn read_schedule<R: Read>(reader: R) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    let mut entries = Vec::new();

    for (row, record) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let record: ScheduleRecord = record?;

        let train = match TrainNo::parse_normalized(&record.train_no) {
            Ok(t) => t,
            Err(e) => {
                debug!(row, error = %e, "skipping schedule row with bad train number");
                continue;
            }
        };
        let station = match StationCode::parse_normalized(&record.station_code) {
            Ok(s) => s,
            Err(e) => {
                debug!(row, error = %e, "skipping schedule row with bad station code");
                continue;
            }
        };

        let station_name = record
            .station_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        entries.push(ScheduleEntry {
            train,
            station,
            station_name,
        });
    }

    Ok(entries)
}

/// Read train info entries from any CSV reader.
pub fn read_train_info<R: Read>(reader: R) -> Result<Vec<TrainInfoEntry>, ScheduleError> {
    let mut entries = Vec::new();

    for (row, record) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let record: TrainInfoRecord = record?;

        let train = match TrainNo::parse_normalized(&record.train_no) {
            Ok(t) => t,
            Err(e) => {
                debug!(row, error = %e, "skipping train info row with bad train number");
                continue;
            }
        };

        let name = record.train_name.trim().to_string();
        if name.is_empty() {
            debug!(row, "skipping train info row with empty name");
            continue;
        }

        entries.push(TrainInfoEntry { train, name });
    }

    Ok(entries)
}

/// Load the schedule table from a file.
///
/// # Errors
///
/// Fails if the file cannot be opened or read as CSV, or if it contains no
/// valid rows at all (an empty network at startup is a configuration
/// mistake, not a data-quality blip).
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    let file = File::open(path).map_err(|source| ScheduleError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let entries = read_schedule(file)?;
    if entries.is_empty() {
        return Err(ScheduleError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(entries)
}

/// Load the train info table from a file.
pub fn load_train_info(path: &Path) -> Result<Vec<TrainInfoEntry>, ScheduleError> {
    let file = File::open(path).map_err(|source| ScheduleError::Io {
        path: path.display().to_string(),
        source,
    })?;

    read_train_info(file)
}
