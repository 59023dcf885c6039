use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};
use trivia_migration::{Migrator, MigratorTrait};

pub async fn init_pool_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(database_url)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("failed to apply database migrations")?;

    Ok(db)
}
