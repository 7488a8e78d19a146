use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can abort a schedule generation run.
///
/// Broken schedule metadata is fatal; broken individual event records are
/// not (they are tolerated downstream), so no variant exists for them.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule file '{0}' not found")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing required sections in schedule file: {0}")]
    MissingSections(String),
    #[error("missing required schedule_info fields: {0}")]
    MissingInfoFields(String),
    #[error("invalid {field} in schedule_info (use YYYY-MM-DD): '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("schedule_info start_date {start} is after end_date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("PDF compilation failed: '{0}' was not produced")]
    CompilationFailed(PathBuf),
}
