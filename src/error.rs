//! Error types for the scheduling core.
//!
//! All schedule failures are deterministic functions of (location, date,
//! control points): retrying without changing the inputs reproduces the same
//! failure, so none of these variants are retried anywhere in the crate.

use chrono::NaiveDate;
use thiserror::Error;

use crate::solar::SolarEvent;

/// Custom error types for the daycurve scheduling library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Coordinates outside the valid astronomical range.
    #[error("invalid location: latitude {0}°, longitude {1}°")]
    InvalidLocation(f64, f64),

    /// The resolved schedule is not strictly ascending.
    ///
    /// Solar-relative control points can cross order on certain dates and
    /// latitudes; this is treated as a configuration error and surfaced
    /// loudly rather than silently reordered.
    #[error("control points out of order: hour {1} does not ascend from {0}")]
    UnorderedControlPoints(f64, f64),

    /// The named solar event never occurs on the given date (polar day or
    /// polar night).
    #[error("{0} does not occur on {1}")]
    EventUndefinedForDate(SolarEvent, NaiveDate),

    /// A schedule was evaluated with no control points at all.
    #[error("schedule has no control points")]
    EmptySchedule,

    /// A time-of-day string from the configuration could not be parsed.
    #[error("unrecognized time spec: {0:?}")]
    InvalidTimeSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
