use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    engine::SlotEngine,
    errors::AvailabilityResult,
    models::availability::SubmitResult,
    store::AvailabilityStore,
    working_hours::WorkingHours,
};

/// A [`SlotEngine`] bound to the store it was loaded from.
///
/// Drives the load, edit, submit, reload cycle for one professor. A failed
/// fetch or submit leaves the engine exactly as it was, so the pending edits
/// can be retried or discarded with [`SlotEngine::reset`].
pub struct EditorSession<S> {
    store: S,
    professor_id: Uuid,
    engine: SlotEngine,
}

impl<S: AvailabilityStore> EditorSession<S> {
    pub async fn open(store: S, professor_id: Uuid, hours: WorkingHours) -> AvailabilityResult<Self> {
        let mut session = Self {
            store,
            professor_id,
            engine: SlotEngine::with_working_hours(hours),
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn professor_id(&self) -> Uuid {
        self.professor_id
    }

    pub fn engine(&self) -> &SlotEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SlotEngine {
        &mut self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reloads the baseline from the store, discarding pending edits.
    pub async fn refresh(&mut self) -> AvailabilityResult<()> {
        let slots = self.store.fetch_baseline(self.professor_id).await?;
        self.engine.load_baseline(slots);
        info!(
            professor_id = %self.professor_id,
            slots = self.engine.baseline().len(),
            "Availability baseline loaded"
        );
        Ok(())
    }

    /// Sends the pending change-set and resynchronizes with the store.
    ///
    /// Nothing is sent when there are no pending edits.
    pub async fn submit(&mut self) -> AvailabilityResult<SubmitResult> {
        let change_set = self.engine.compute_change_set();
        if change_set.is_empty() {
            debug!(professor_id = %self.professor_id, "No pending changes to submit");
            return Ok(SubmitResult::default());
        }

        let result = self
            .store
            .submit_change_set(self.professor_id, &change_set)
            .await?;
        info!(
            professor_id = %self.professor_id,
            added = result.added,
            removed = result.removed,
            "Change-set applied"
        );

        self.refresh().await?;
        Ok(result)
    }
}
