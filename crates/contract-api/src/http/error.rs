//! Mapping from domain errors to HTTP responses.

use super::types::ErrorResponse;
use crate::auth::AuthError;
use crate::item_actor::ItemError;
use crate::lifecycle::SystemError;
use crate::user_actor::UserError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Error returned by every handler. The variant picks the status code; the
/// message becomes `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body, failed validation, or a uniqueness conflict.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// A store could not be reached. Details are logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::Internal(message) => {
                error!(error = %message, "Request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(_) => ApiError::NotFound("Item not found".into()),
            ItemError::Validation(v) => ApiError::BadRequest(v.to_string()),
            ItemError::Store(s) => ApiError::Internal(s),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound("User not found".into()),
            UserError::Validation(v) => ApiError::BadRequest(v.to_string()),
            UserError::Conflict(message) => ApiError::BadRequest(message),
            UserError::Store(s) => ApiError::Internal(s),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingField(_) => ApiError::BadRequest(e.to_string()),
            AuthError::Unauthorized => ApiError::Unauthorized(e.to_string()),
            AuthError::Forbidden => ApiError::Forbidden(e.to_string()),
            AuthError::Store(s) => ApiError::Internal(s),
        }
    }
}

impl From<SystemError> for ApiError {
    fn from(e: SystemError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn error_kinds_pick_status_codes() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (ItemError::NotFound("9".into()).into(), StatusCode::NOT_FOUND),
            (
                ItemError::Validation(ValidationError::required("name")).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::Conflict("Username already registered".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::Unauthorized.into(), StatusCode::UNAUTHORIZED),
            (AuthError::Forbidden.into(), StatusCode::FORBIDDEN),
            (
                AuthError::MissingField("username").into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::Store("closed".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
