use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::UserStoreError;

/// Connect to the database named by the connection string.
///
/// Does NOT run migrations - call `migrate()` separately.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, UserStoreError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| UserStoreError::database("connect_database", e))?;

    tracing::debug!("connected to database: {}", database_url);

    Ok(db)
}

/// Idempotently bring the schema up to date.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), UserStoreError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| UserStoreError::database("run_migrations", e))?;

    tracing::debug!("database migrations completed");

    Ok(())
}
