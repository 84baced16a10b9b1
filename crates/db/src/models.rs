use availability_core::models::time_slot::TimeSlot;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored availability hour. `start_time` is the naive start of the
/// slot's hour, so the unique key `(professor_id, start_time)` is the slot key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessorSlot {
    pub id: Uuid,
    pub professor_id: Uuid,
    pub start_time: NaiveDateTime,
    pub created_at: DateTime<Utc>,
}

impl From<DbProfessorSlot> for TimeSlot {
    fn from(row: DbProfessorSlot) -> Self {
        TimeSlot::from(row.start_time)
    }
}
