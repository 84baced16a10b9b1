use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{AvailabilityError, AvailabilityResult};

/// One hour of availability, keyed by calendar date and hour of day.
///
/// Any timestamp inside the same hour maps to the same slot: minutes,
/// seconds and sub-second parts are dropped at construction, so equality,
/// hashing and ordering only ever see the truncated key. Slots order
/// chronologically.
///
/// On the wire a slot is the naive start timestamp of its hour
/// (`2024-05-06T09:00:00`). Incoming timestamps are truncated, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "NaiveDateTime", into = "NaiveDateTime")]
pub struct TimeSlot {
    date: NaiveDate,
    hour: u32,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, hour: u32) -> AvailabilityResult<Self> {
        if hour > 23 {
            return Err(AvailabilityError::Validation(format!(
                "Hour must be between 0 and 23, got {}",
                hour
            )));
        }
        Ok(Self { date, hour })
    }

    /// Builds a slot from calendar fields, e.g. `TimeSlot::at(2024, 5, 6, 9)`.
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> AvailabilityResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AvailabilityError::Validation(format!("Invalid date {}-{:02}-{:02}", year, month, day))
        })?;
        Self::new(date, hour)
    }

    /// Slot containing `datetime`, read in its own (local) wall-clock time.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from(datetime.naive_local())
    }

    // Callers guarantee `hour < 24`.
    pub(crate) fn from_parts(date: NaiveDate, hour: u32) -> Self {
        debug_assert!(hour < 24);
        Self { date, hour }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.hour))
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::hours(1)
    }
}

impl From<NaiveDateTime> for TimeSlot {
    fn from(datetime: NaiveDateTime) -> Self {
        Self {
            date: datetime.date(),
            hour: datetime.hour(),
        }
    }
}

impl From<TimeSlot> for NaiveDateTime {
    fn from(slot: TimeSlot) -> Self {
        slot.start()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.date, self.hour)
    }
}
