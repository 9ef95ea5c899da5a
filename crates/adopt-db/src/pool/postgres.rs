//! PostgreSQL connection pool and schema migrations

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use adopt_common::DatabaseConfig;
use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// A migration compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedMigration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

macro_rules! embed_migration {
    ($version:literal, $name:literal) => {
        EmbeddedMigration {
            version: $version,
            name: $name,
            sql: include_str!(concat!("../../migrations/", $version, "_", $name, ".sql")),
        }
    };
}

/// Schema migrations in apply order
pub const MIGRATIONS: &[EmbeddedMigration] = &[
    embed_migration!(20240301000001, "create_users"),
    embed_migration!(20240301000002, "create_animals"),
    embed_migration!(20240301000003, "create_animal_images"),
    embed_migration!(20240301000004, "create_chat_messages"),
];

/// [`MigrationSource`] over [`MIGRATIONS`]
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedMigrations(pub &'static [EmbeddedMigration]);

impl EmbeddedMigrations {
    fn migrations(self) -> Vec<Migration> {
        self.0
            .iter()
            .map(|m| {
                Migration::new(
                    m.version,
                    Cow::Owned(m.name.replace('_', " ")),
                    MigrationType::Simple,
                    Cow::Borrowed(m.sql),
                    false,
                )
            })
            .collect()
    }
}

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { Ok(self.migrations()) })
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect(&config.url).await
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
}

/// Apply pending migrations from [`MIGRATIONS`]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations(MIGRATIONS)).await?;
    migrator.run(pool).await?;

    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
