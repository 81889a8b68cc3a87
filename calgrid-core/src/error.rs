//! Error types for calgrid.
//!
//! Store operations never fail; these errors come from the edges where
//! text or files are turned into calendar values.

use thiserror::Error;

/// Errors that can occur while building calendar values or loading config.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid month {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("Invalid month format '{0}'. Expected YYYY-MM")]
    MonthParse(String),

    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    DateParse(String),

    #[error("Invalid time format '{0}'. Expected HH:MM")]
    TimeParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
