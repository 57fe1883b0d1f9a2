use chrono::NaiveDate;
use thiserror::Error;

/// The pipeline has no recoverable-error taxonomy by design: every
/// numeric edge case is defined to produce a value, not a failure.
/// The one caller-visible failure is a start date whose 365-day
/// window cannot be represented.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid date range: 365-day window from {start} overflows the calendar")]
    InvalidDateRange { start: NaiveDate },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
