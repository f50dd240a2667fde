//! Session endpoints. Login resolves a username against the mock user
//! registry and hands back the username as the bearer token; `/me` echoes the
//! authenticated profile.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::{ApiError, ServiceError};
use crate::models::RecordStatus;

use super::common::success_response;
use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let username = body.username.trim();
    let store = state.store.read().await;
    let user = store
        .users
        .iter()
        .find(|u| u.username == username && u.status == RecordStatus::Active)
        .map(AuthUser::from)
        .ok_or(ServiceError::Unauthorized)?;
    info!(username = %user.username, "login");
    Ok(success_response(LoginResponse {
        token: user.username.clone(),
        user,
    }))
}

async fn me(user: AuthUser) -> Response {
    success_response(user)
}
