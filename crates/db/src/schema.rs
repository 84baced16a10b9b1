use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per professor and available hour
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professor_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professor_id UUID NOT NULL,
            start_time TIMESTAMP WITHOUT TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT professor_slots_hour CHECK (date_trunc('hour', start_time) = start_time),
            CONSTRAINT professor_slots_unique UNIQUE (professor_id, start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_professor_slots_professor_id ON professor_slots(professor_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
