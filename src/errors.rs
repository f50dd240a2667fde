use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the service layer and the core store/workflow modules.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: Uuid },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no transition available from status '{status}'")]
    InvalidTransition { status: String },

    #[error("record is not actionable: {0}")]
    NotActionable(String),

    #[error("record in status '{status}' cannot be {action}")]
    Locked { status: String, action: &'static str },

    #[error("authentication required")]
    Unauthorized,

    #[error("access denied: {0}")]
    Forbidden(String),
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Error type returned by HTTP handlers. Wraps [`ServiceError`] and adds the
/// handful of edge-only failure modes (malformed payloads).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("bad request: {0}")]
    BadRequest(String),
}

/// JSON body produced for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::DuplicateId { .. } => StatusCode::CONFLICT,
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
                ServiceError::NotActionable(_) => StatusCode::CONFLICT,
                ServiceError::Locked { .. } => StatusCode::CONFLICT,
                ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
                ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!(ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(ServiceError::not_found("adjustment", Uuid::nil()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_transition_maps_to_conflict() {
        let err = ApiError::from(ServiceError::InvalidTransition {
            status: "Done".into(),
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let err = ApiError::from(ServiceError::Forbidden("write:inventory".into()));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }
}
