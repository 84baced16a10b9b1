use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use availability_core::{
    errors::AvailabilityResult,
    models::{
        availability::{ChangeSet, SubmitResult},
        time_slot::TimeSlot,
    },
    store::AvailabilityStore,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local availability store with the same semantics as
/// [`PgAvailabilityStore`](crate::PgAvailabilityStore). Used for local runs
/// and tests.
#[derive(Debug, Default)]
pub struct MemoryAvailabilityStore {
    slots: RwLock<HashMap<Uuid, BTreeSet<TimeSlot>>>,
}

impl MemoryAvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline(professor_id: Uuid, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut map = HashMap::new();
        map.insert(professor_id, slots.into_iter().collect());
        Self {
            slots: RwLock::new(map),
        }
    }
}

#[async_trait]
impl AvailabilityStore for MemoryAvailabilityStore {
    async fn fetch_baseline(&self, professor_id: Uuid) -> AvailabilityResult<Vec<TimeSlot>> {
        let slots = self.slots.read().await;
        Ok(slots
            .get(&professor_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn submit_change_set(
        &self,
        professor_id: Uuid,
        change_set: &ChangeSet,
    ) -> AvailabilityResult<SubmitResult> {
        let mut slots = self.slots.write().await;
        let set = slots.entry(professor_id).or_default();

        let mut result = SubmitResult::default();
        for slot in &change_set.remove {
            if set.remove(slot) {
                result.removed += 1;
            }
        }
        for slot in &change_set.add {
            if set.insert(*slot) {
                result.added += 1;
            }
        }

        tracing::debug!(
            "Memory store applied change set: professor_id={}, added={}, removed={}",
            professor_id,
            result.added,
            result.removed
        );
        Ok(result)
    }
}
