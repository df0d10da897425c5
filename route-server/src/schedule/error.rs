//! Schedule loading error types.

/// Errors that can occur while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Could not open the file
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level failure (bad header, unreadable record)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but contained no usable rows
    #[error("no valid rows in {path}")]
    Empty { path: String },
}
