use crate::models::DbProfessorSlot;
use availability_core::models::{
    availability::{ChangeSet, SubmitResult},
    time_slot::TimeSlot,
};
use chrono::NaiveDateTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_slots_by_professor_id(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
) -> Result<Vec<DbProfessorSlot>> {
    tracing::debug!("Getting availability slots for professor: {}", professor_id);

    let slots = sqlx::query_as::<_, DbProfessorSlot>(
        r#"
        SELECT id, professor_id, start_time, created_at
        FROM professor_slots
        WHERE professor_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(professor_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Applies removals then additions in one transaction.
///
/// Additions that already exist and removals that do not are skipped, so the
/// returned counts only reflect rows that actually changed.
pub async fn apply_change_set(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    change_set: &ChangeSet,
) -> Result<SubmitResult> {
    let to_add = start_times(&change_set.add);
    let to_remove = start_times(&change_set.remove);

    tracing::debug!(
        "Applying change set: professor_id={}, add={}, remove={}",
        professor_id,
        to_add.len(),
        to_remove.len()
    );

    let mut tx = pool.begin().await?;

    let removed = sqlx::query(
        r#"
        DELETE FROM professor_slots
        WHERE professor_id = $1 AND start_time = ANY($2)
        "#,
    )
    .bind(professor_id)
    .bind(&to_remove)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let added = sqlx::query(
        r#"
        INSERT INTO professor_slots (professor_id, start_time)
        SELECT $1, start_time FROM UNNEST($2::timestamp[]) AS t(start_time)
        ON CONFLICT (professor_id, start_time) DO NOTHING
        "#,
    )
    .bind(professor_id)
    .bind(&to_add)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;

    tracing::debug!(
        "Change set applied: professor_id={}, added={}, removed={}",
        professor_id,
        added,
        removed
    );
    Ok(SubmitResult { added, removed })
}

fn start_times(slots: &[TimeSlot]) -> Vec<NaiveDateTime> {
    let mut times: Vec<NaiveDateTime> = slots.iter().map(TimeSlot::start).collect();
    times.sort();
    times.dedup();
    times
}
