//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the storage API
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::health::root),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::health::RootResponse)
    ),
    info(
        title = "Storage Search API",
        version = "0.1.0",
        description = "Dimension search over boxes and shelves"
    ),
    nest(
        (path = "/api", api = domain_storage::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_paths_are_nested_under_api() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/fetch_storage"));
        assert!(doc.paths.paths.contains_key("/api/search_storage"));
        assert!(doc.paths.paths.contains_key("/"));
    }
}
