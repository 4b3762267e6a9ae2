pub mod history;
pub mod pool;

pub use history::HistoryStore;
pub use pool::create_pool;

use sqlx::SqlitePool;

use crate::error::Result;

/// Schema migrations embedded at compile time
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open the database at `database_url` and bring its schema up to date
pub async fn open_database(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    tracing::info!("Opening database at: {}", database_url);

    let pool = create_pool(database_url, max_connections).await?;

    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations complete");

    Ok(pool)
}
