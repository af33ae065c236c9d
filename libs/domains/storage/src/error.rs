use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Validation(String),

    /// A stored row that cannot be turned into the public shape.
    #[error("Record '{id}' could not be shaped: {reason}")]
    RecordShaping { id: String, reason: String },

    #[error("Database error: {0}")]
    Database(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// Convert StorageError to AppError for standardized error responses
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(msg) => AppError::Validation(msg),
            StorageError::RecordShaping { .. } | StorageError::Database(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_is_bad_request() {
        let response = StorageError::Validation("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_is_internal_error() {
        let err: StorageError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, StorageError::Database(ref m) if m.contains("connection reset")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connection_failure_is_internal_error_not_unavailable() {
        let err: StorageError =
            DbErr::ConnectionAcquire(sea_orm::error::ConnAcquireErr::Timeout).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
