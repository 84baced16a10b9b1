use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::AvailabilityResult,
    models::{
        availability::{ChangeSet, SubmitResult},
        time_slot::TimeSlot,
    },
};

/// Persistence side of the editor: the source of the baseline and the sink
/// for change-sets.
///
/// Implementations must treat re-applying a change-set as harmless: adding a
/// slot that already exists or removing one that does not is not an error.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn fetch_baseline(&self, professor_id: Uuid) -> AvailabilityResult<Vec<TimeSlot>>;

    async fn submit_change_set(
        &self,
        professor_id: Uuid,
        change_set: &ChangeSet,
    ) -> AvailabilityResult<SubmitResult>;
}
