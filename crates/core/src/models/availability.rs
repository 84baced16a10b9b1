use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AvailabilityError, AvailabilityResult},
    models::time_slot::TimeSlot,
    working_hours::WorkingHours,
};

/// Pending edits of one session, as submitted to the availability store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default)]
    pub add: Vec<TimeSlot>,
    #[serde(default)]
    pub remove: Vec<TimeSlot>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }

    /// Sorts both lists and drops duplicates.
    pub fn normalized(self) -> Self {
        let add: BTreeSet<_> = self.add.into_iter().collect();
        let remove: BTreeSet<_> = self.remove.into_iter().collect();
        Self {
            add: add.into_iter().collect(),
            remove: remove.into_iter().collect(),
        }
    }

    /// Server-side check of an incoming change-set.
    ///
    /// Additions must fall inside `hours`. Removals are not checked against
    /// the window so that slots recorded under an older configuration can
    /// still be cleared.
    pub fn validate(&self, hours: &WorkingHours) -> AvailabilityResult<()> {
        for slot in &self.add {
            hours.check(*slot)?;
        }

        let added: BTreeSet<_> = self.add.iter().collect();
        if let Some(slot) = self.remove.iter().find(|slot| added.contains(slot)) {
            return Err(AvailabilityError::Validation(format!(
                "Slot {} is both added and removed",
                slot
            )));
        }

        Ok(())
    }
}

/// Rendering-facing projection of the engine state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedView {
    pub kept: Vec<TimeSlot>,
    pub pending_add: Vec<TimeSlot>,
    pub pending_remove: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Unavailable,
    Kept,
    PendingAdd,
    PendingRemove,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub professor_id: Uuid,
    pub slots: Vec<TimeSlot>,
}

/// Rows actually changed by the store when applying a change-set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub added: u64,
    pub removed: u64,
}
