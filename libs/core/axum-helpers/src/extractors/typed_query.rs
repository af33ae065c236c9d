//! Query-string extractor that rejects with a structured 422.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Typed query-string extractor.
///
/// Behaves like [`axum::extract::Query`], except that a missing required
/// parameter or a value that fails to parse is answered with
/// `422 Unprocessable Entity` and an `INVALID_QUERY` error body instead of
/// axum's plain-text 400.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::TypedQuery;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Lookup {
///     id_list: String,
/// }
///
/// async fn lookup(TypedQuery(q): TypedQuery<Lookup>) -> String {
///     q.id_list
/// }
///
/// let app: Router = Router::new().route("/lookup", get(lookup));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for TypedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(TypedQuery(value))
    }
}
