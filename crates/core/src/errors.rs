use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::models::time_slot::TimeSlot;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Out of working hours: {0}")]
    OutOfHours(#[from] OutOfHoursError),

    #[error("Availability store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejection of a toggle that targets a slot or day outside the configured
/// working window. The engine state is untouched when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutOfHoursError {
    #[error("{slot} is outside {start_hour:02}:00-{end_hour:02}:00")]
    Hour {
        slot: TimeSlot,
        start_hour: u32,
        end_hour: u32,
    },

    #[error("{date} is a {weekday}, not a business day")]
    Weekday { date: NaiveDate, weekday: Weekday },
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;
