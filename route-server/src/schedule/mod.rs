//! Reference-data loading: schedule and train info CSV tables, plus the
//! display-name directories derived from them.

mod directory;
mod error;
mod loader;

pub use directory::{StationDirectory, StationOption, TrainDirectory};
pub use error::ScheduleError;
pub use loader::{
    ScheduleEntry, TrainInfoEntry, load_schedule, load_train_info, read_schedule, read_train_info,
};
