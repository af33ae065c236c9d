use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    TypedQuery,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, InvalidQueryResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StorageResult;
use crate::models::{
    CountryCode, FetchStorageQuery, FetchStorageResponse, SearchStorageQuery,
    SearchStorageResponse, StorageItem, StorageSummary,
};
use crate::repository::StorageRepository;
use crate::service::StorageService;

pub const TAG: &str = "storage";

/// OpenAPI documentation for the storage API
#[derive(OpenApi)]
#[openapi(
    paths(fetch_storage, search_storage),
    components(
        schemas(
            StorageItem,
            StorageSummary,
            CountryCode,
            FetchStorageResponse,
            SearchStorageResponse
        ),
        responses(
            BadRequestValidationResponse,
            InvalidQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Storage furniture lookup and dimension search")
    )
)]
pub struct ApiDoc;

/// Create the storage router with all HTTP endpoints
pub fn router<R: StorageRepository + 'static>(service: StorageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/fetch_storage", get(fetch_storage))
        .route("/search_storage", get(search_storage))
        .with_state(shared_service)
}

/// Fetch items by a comma-separated id list
///
/// Inactive items are included. Unknown ids are skipped.
#[utoipa::path(
    get,
    path = "/fetch_storage",
    tag = TAG,
    params(FetchStorageQuery),
    responses(
        (status = 200, description = "Items matching the given ids", body = FetchStorageResponse),
        (status = 422, response = InvalidQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn fetch_storage<R: StorageRepository>(
    State(service): State<Arc<StorageService<R>>>,
    TypedQuery(query): TypedQuery<FetchStorageQuery>,
) -> StorageResult<Json<FetchStorageResponse>> {
    let response = service.fetch_storage(&query.id_list).await?;
    Ok(Json(response))
}

/// Search active items by width, depth and height
#[utoipa::path(
    get,
    path = "/search_storage",
    tag = TAG,
    params(SearchStorageQuery),
    responses(
        (status = 200, description = "One page of matching items", body = SearchStorageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = InvalidQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_storage<R: StorageRepository>(
    State(service): State<Arc<StorageService<R>>>,
    TypedQuery(query): TypedQuery<SearchStorageQuery>,
) -> StorageResult<Json<SearchStorageResponse>> {
    let response = service.search_storage(query).await?;
    Ok(Json(response))
}
