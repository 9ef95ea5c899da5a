//! # adopt-db
//!
//! Database layer implementing the `adopt-core` repository traits with PostgreSQL via SQLx.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use adopt_common::AppConfig;
//! use adopt_db::{create_pool, run_migrations, PgAnimalRepository};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let animals = PgAnimalRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{PgAnimalRepository, PgChatMessageRepository, PgUserRepository};
