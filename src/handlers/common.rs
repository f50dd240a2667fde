//! Response and payload helpers shared by every handler module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::{self, AuthUser, RouteRequirement};
use crate::errors::ApiError;

pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Request bodies for create/edit are free-form JSON objects that get run
/// through the kind's form definition before they become typed input.
pub fn json_object(value: Value) -> Result<Map<String, Value>, ApiError> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".to_string()))
}

/// Turn a validated value map into the service-layer input type.
pub fn parse_payload<T: DeserializeOwned>(values: Map<String, Value>) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(values))
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))
}

/// Extra permission check for mutating handlers; the router guard only
/// enforces the screen's read permission.
pub fn require(user: &AuthUser, permission: &'static str) -> Result<(), ApiError> {
    auth::authorize(user, &RouteRequirement::permission(permission))?;
    Ok(())
}
