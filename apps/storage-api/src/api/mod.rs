use axum::{Router, routing::get};

pub mod health;
pub mod storage;

use crate::state::AppState;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(storage::router(state))
}

/// Creates a router with `/` and `/ready`, which need the app state.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
