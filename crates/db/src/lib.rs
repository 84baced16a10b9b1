pub mod memory;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub use memory::MemoryAvailabilityStore;
pub use store::PgAvailabilityStore;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the database")?;

    Ok(pool)
}
