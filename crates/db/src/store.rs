use async_trait::async_trait;
use availability_core::{
    errors::AvailabilityResult,
    models::{
        availability::{ChangeSet, SubmitResult},
        time_slot::TimeSlot,
    },
    store::AvailabilityStore,
};
use uuid::Uuid;

use crate::{repositories::availability, DbPool};

/// Postgres-backed availability store.
#[derive(Debug, Clone)]
pub struct PgAvailabilityStore {
    pool: DbPool,
}

impl PgAvailabilityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn fetch_baseline(&self, professor_id: Uuid) -> AvailabilityResult<Vec<TimeSlot>> {
        let rows = availability::get_slots_by_professor_id(&self.pool, professor_id).await?;
        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    async fn submit_change_set(
        &self,
        professor_id: Uuid,
        change_set: &ChangeSet,
    ) -> AvailabilityResult<SubmitResult> {
        let result = availability::apply_change_set(&self.pool, professor_id, change_set).await?;
        Ok(result)
    }
}
