//! # Slot Engine
//!
//! Editing model for one professor's hourly availability. The engine keeps
//! three sets of [`TimeSlot`]s:
//!
//! - **baseline**: what the store last confirmed, replaced only by
//!   [`SlotEngine::load_baseline`]
//! - **additions**: slots newly marked available in this session
//! - **removals**: baseline slots marked for deletion in this session
//!
//! Removals are always a subset of the baseline. Additions never overlap the
//! baseline, except for a removal-marked baseline slot that a whole-day
//! selection re-adds (see [`SlotEngine::toggle_day`]).
//!
//! The engine is synchronous and performs no I/O. Fetching the baseline and
//! submitting the change-set belong to an [`AvailabilityStore`](crate::store::AvailabilityStore).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    errors::OutOfHoursError,
    models::{
        availability::{ChangeSet, DerivedView, SlotStatus},
        time_slot::TimeSlot,
    },
    working_hours::WorkingHours,
};

#[derive(Debug, Clone, Default)]
pub struct SlotEngine {
    hours: WorkingHours,
    baseline: BTreeSet<TimeSlot>,
    additions: BTreeSet<TimeSlot>,
    removals: BTreeSet<TimeSlot>,
}

impl SlotEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_hours(hours: WorkingHours) -> Self {
        Self {
            hours,
            ..Self::default()
        }
    }

    pub fn working_hours(&self) -> &WorkingHours {
        &self.hours
    }

    pub fn baseline(&self) -> &BTreeSet<TimeSlot> {
        &self.baseline
    }

    pub fn additions(&self) -> &BTreeSet<TimeSlot> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<TimeSlot> {
        &self.removals
    }

    /// Replaces the baseline and discards all pending edits.
    pub fn load_baseline(&mut self, slots: impl IntoIterator<Item = TimeSlot>) {
        self.baseline = slots.into_iter().collect();
        self.additions.clear();
        self.removals.clear();
        debug!("Loaded baseline of {} slots", self.baseline.len());
    }

    /// Discards pending edits, keeping the baseline.
    pub fn reset(&mut self) {
        self.additions.clear();
        self.removals.clear();
        debug!("Discarded pending availability edits");
    }

    /// Flips a single hour.
    ///
    /// A baseline slot moves in or out of the removals; any other slot moves
    /// in or out of the additions. Toggling the same slot twice restores the
    /// previous state.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfHoursError`] without touching the state when the slot
    /// is outside the working window or on a non-business day.
    pub fn toggle_hour(&mut self, slot: TimeSlot) -> Result<(), OutOfHoursError> {
        self.hours.check(slot)?;

        if self.baseline.contains(&slot) {
            if !self.removals.remove(&slot) {
                self.removals.insert(slot);
            }
            self.additions.remove(&slot);
        } else if !self.additions.remove(&slot) {
            self.additions.insert(slot);
        }

        debug!(%slot, status = ?self.status(slot), "Toggled hour");
        Ok(())
    }

    /// Whole-day selection, as issued from a month view.
    ///
    /// If any working slot of `day` is pending addition, every pending
    /// addition of that day is dropped. Otherwise each working slot that is
    /// either outside the baseline or marked for removal is added, and its
    /// removal mark is cleared.
    ///
    /// A removal-marked baseline slot therefore ends up as a pending
    /// addition rather than back in the kept set, so it is briefly present in
    /// both the baseline and the additions. Stores apply such an addition as
    /// a no-op.
    pub fn toggle_day(&mut self, day: NaiveDate) -> Result<(), OutOfHoursError> {
        self.hours.check_day(day)?;

        let day_slots: Vec<TimeSlot> = self.hours.slots_for(day).collect();

        if day_slots.iter().any(|slot| self.additions.contains(slot)) {
            for slot in &day_slots {
                self.additions.remove(slot);
            }
            debug!(%day, "Cleared pending additions for day");
            return Ok(());
        }

        let batch: Vec<TimeSlot> = day_slots
            .into_iter()
            .filter(|slot| !self.baseline.contains(slot) || self.removals.contains(slot))
            .collect();

        for slot in &batch {
            self.removals.remove(slot);
            self.additions.insert(*slot);
        }

        debug!(%day, added = batch.len(), "Selected day");
        Ok(())
    }

    pub fn compute_change_set(&self) -> ChangeSet {
        ChangeSet {
            add: self.additions.iter().copied().collect(),
            remove: self.removals.iter().copied().collect(),
        }
    }

    pub fn derived_view(&self) -> DerivedView {
        DerivedView {
            kept: self.baseline.difference(&self.removals).copied().collect(),
            pending_add: self.additions.iter().copied().collect(),
            pending_remove: self.removals.iter().copied().collect(),
        }
    }

    pub fn status(&self, slot: TimeSlot) -> SlotStatus {
        if self.additions.contains(&slot) {
            SlotStatus::PendingAdd
        } else if self.removals.contains(&slot) {
            SlotStatus::PendingRemove
        } else if self.baseline.contains(&slot) {
            SlotStatus::Kept
        } else {
            SlotStatus::Unavailable
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.additions.is_empty() || !self.removals.is_empty()
    }
}
