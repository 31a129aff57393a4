//! # REST API
//!
//! JSON endpoints nested under `/api`. Domain errors are turned into an
//! [`ErrorResponse`] body with a matching status code.

pub mod auth_apis;
pub mod mappers;
pub mod member_apis;
pub mod tree_apis;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::error::FamilyTreeError;
use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth_apis::router())
        .merge(member_apis::router())
        .merge(tree_apis::router())
}

pub fn status_code(err: &FamilyTreeError) -> StatusCode {
    match err {
        FamilyTreeError::MissingField(_)
        | FamilyTreeError::InvalidDate(_)
        | FamilyTreeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        FamilyTreeError::InvalidCredentials | FamilyTreeError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        FamilyTreeError::NotFound(_) => StatusCode::NOT_FOUND,
        FamilyTreeError::DuplicateEmail(_) => StatusCode::CONFLICT,
        FamilyTreeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Unwrap an extractor result, turning its rejection into an `InvalidRequest`
pub fn extract<T, R: std::fmt::Display>(
    extracted: std::result::Result<T, R>,
) -> Result<T, FamilyTreeError> {
    extracted.map_err(|rejection| FamilyTreeError::InvalidRequest(rejection.to_string()))
}

/// Convert a domain error into a JSON error response
pub fn error_response(err: FamilyTreeError) -> Response {
    let status = status_code(&err);
    let message = if status.is_server_error() {
        error!("Internal error: {:?}", err);
        "Unexpected server error".to_string()
    } else {
        warn!("Request failed: {}", err);
        err.to_string()
    };

    let body = ErrorResponse {
        error: err.kind().to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(status_code(&FamilyTreeError::MissingField("name")), StatusCode::BAD_REQUEST);
        assert_eq!(status_code(&FamilyTreeError::InvalidDate("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_code(&FamilyTreeError::InvalidRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_code(&FamilyTreeError::DuplicateEmail("a".into())), StatusCode::CONFLICT);
        assert_eq!(status_code(&FamilyTreeError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_code(&FamilyTreeError::NotAuthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_code(&FamilyTreeError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_code(&FamilyTreeError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = error_response(FamilyTreeError::Internal(anyhow::anyhow!("lock poisoned")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "internal");
        assert!(!error.message.contains("lock"));
    }
}
