//! PostgreSQL connection management, migrations, health checks and
//! read-only transactions.

mod config;
mod connector;
mod health;
mod transaction;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry, run_migrations};
pub use health::check_health;
pub use transaction::begin_read_only;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
