//! Shared application state.

/// State cloned into handlers that need more than a domain service
/// (readiness and root info). Cloning only copies the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
