use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AvailabilityError, AvailabilityResult, OutOfHoursError},
    models::time_slot::TimeSlot,
};

/// Hours and weekdays in which availability may be edited.
///
/// The hour window is half-open: with the defaults (`8..18`, Monday to
/// Friday) the last bookable slot of a day starts at 17:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkingHoursRepr")]
pub struct WorkingHours {
    start_hour: u32,
    end_hour: u32,
    business_days: Vec<Weekday>,
}

#[derive(Deserialize)]
struct WorkingHoursRepr {
    start_hour: u32,
    end_hour: u32,
    business_days: Vec<Weekday>,
}

impl TryFrom<WorkingHoursRepr> for WorkingHours {
    type Error = AvailabilityError;

    fn try_from(repr: WorkingHoursRepr) -> AvailabilityResult<Self> {
        Self::new(repr.start_hour, repr.end_hour, repr.business_days)
    }
}

impl WorkingHours {
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        business_days: impl IntoIterator<Item = Weekday>,
    ) -> AvailabilityResult<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(AvailabilityError::Validation(format!(
                "Invalid working hours {}-{}: start must be before end and end at most 24",
                start_hour, end_hour
            )));
        }

        let mut business_days: Vec<Weekday> = business_days.into_iter().collect();
        business_days.sort_by_key(Weekday::num_days_from_monday);
        business_days.dedup();
        if business_days.is_empty() {
            return Err(AvailabilityError::Validation(
                "At least one business day must be configured".to_string(),
            ));
        }

        Ok(Self {
            start_hour,
            end_hour,
            business_days,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn business_days(&self) -> &[Weekday] {
        &self.business_days
    }

    pub fn slots_per_day(&self) -> usize {
        (self.end_hour - self.start_hour) as usize
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.business_days.contains(&date.weekday())
    }

    pub fn check_day(&self, date: NaiveDate) -> Result<(), OutOfHoursError> {
        if self.is_business_day(date) {
            Ok(())
        } else {
            Err(OutOfHoursError::Weekday {
                date,
                weekday: date.weekday(),
            })
        }
    }

    pub fn check(&self, slot: TimeSlot) -> Result<(), OutOfHoursError> {
        self.check_day(slot.date())?;

        if (self.start_hour..self.end_hour).contains(&slot.hour()) {
            Ok(())
        } else {
            Err(OutOfHoursError::Hour {
                slot,
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            })
        }
    }

    /// Working slots of `date` in chronological order, whether or not the
    /// date is a business day.
    pub fn slots_for(&self, date: NaiveDate) -> impl Iterator<Item = TimeSlot> {
        (self.start_hour..self.end_hour).map(move |hour| TimeSlot::from_parts(date, hour))
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
            business_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}
