use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::RetryConfig;
use database::postgres::PostgresConfig;
use domain_storage::SearchConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration
/// Composes shared config components from the `core_config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub database_retry: RetryConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (RUN_MIGRATIONS, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - DATABASE_URL must be set
        let database_retry = RetryConfig::from_env()?;
        let search = SearchConfig::from_env()?;
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8000
        let run_migrations = env_parse_or_default("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            database_retry,
            search,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/storage")),
                ("RUN_MIGRATIONS", None),
                ("SEARCH_DEFAULT_PAGE_SIZE", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "storage_api");
                assert!(config.run_migrations);
                assert_eq!(config.search.default_page_size, 2000);
                assert_eq!(config.server.port, 8000);
            },
        );
    }

    #[test]
    fn test_config_can_skip_migrations() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/storage")),
                ("RUN_MIGRATIONS", Some("false")),
            ],
            || {
                assert!(!Config::from_env().unwrap().run_migrations);
            },
        );
    }

    #[test]
    fn test_config_rejects_malformed_flag() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/storage")),
                ("RUN_MIGRATIONS", Some("sometimes")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("RUN_MIGRATIONS"));
            },
        );
    }
}
