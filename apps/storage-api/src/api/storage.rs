use axum::Router;
use domain_storage::{PgStorageRepository, StorageService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgStorageRepository::new(state.db.clone());
    let service = StorageService::new(repository, state.config.search.clone());
    handlers::router(service)
}
