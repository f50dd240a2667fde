//! User administration. The whole router sits behind `admin:users`, so no
//! per-handler write checks are needed here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::ApiError;
use crate::forms::{FieldDescriptor, FormDefinition};
use crate::models::User;
use crate::services::CreateUser;
use crate::table::{self, Column, TableQuery};

use super::common::{
    created_response, json_object, no_content_response, parse_payload, success_response,
};
use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/form", get(form))
        .route("/:id", get(get_one).delete(remove))
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("reference", "Reference", |u: &User| u.reference.clone()),
        Column::new("username", "Username", |u: &User| u.username.clone()),
        Column::new("display_name", "Name", |u: &User| u.display_name.clone()),
        Column::new("role", "Role", |u: &User| u.role.to_string()),
        Column::new("status", "Status", |u: &User| u.status.to_string()),
    ]
}

fn form_definition() -> FormDefinition {
    FormDefinition::new(vec![
        FieldDescriptor::text("username", "Username"),
        FieldDescriptor::text("display_name", "Display Name"),
        FieldDescriptor::select(
            "role",
            "Role",
            vec![
                "superadmin".to_string(),
                "admin".to_string(),
                "manager".to_string(),
                "operator".to_string(),
            ],
        ),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.users.list().await;
    let page = table::project(&records, &columns(), &query, state.config.default_page_size);
    Ok(success_response(page))
}

async fn form() -> Response {
    success_response(form_definition())
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    Ok(success_response(state.services.users.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let values = form_definition().validate_full(&json_object(body)?)?;
    let input: CreateUser = parse_payload(values)?;
    let created = state.services.users.create(&user.username, input).await?;
    Ok(created_response(created))
}

async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state.services.users.delete(id).await?;
    Ok(no_content_response())
}
