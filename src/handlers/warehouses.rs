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
use crate::models::Warehouse;
use crate::services::{CreateWarehouse, UpdateWarehouse};
use crate::table::{self, Column, TableQuery};

use super::common::{
    created_response, json_object, no_content_response, parse_payload, require, success_response,
};
use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/form", get(form))
        .route("/:id", get(get_one).put(update).delete(remove))
}

fn columns() -> Vec<Column<Warehouse>> {
    vec![
        Column::new("reference", "Reference", |w: &Warehouse| {
            w.reference.clone()
        }),
        Column::new("name", "Name", |w: &Warehouse| w.name.clone()),
        Column::new("location", "Location", |w: &Warehouse| w.location.clone()),
        Column::new("manager", "Manager", |w: &Warehouse| w.manager.clone()),
        Column::new("status", "Status", |w: &Warehouse| w.status.to_string()),
    ]
}

fn form_definition() -> FormDefinition {
    FormDefinition::new(vec![
        FieldDescriptor::text("name", "Name"),
        FieldDescriptor::text("location", "Location"),
        FieldDescriptor::text("manager", "Manager"),
        FieldDescriptor::select(
            "status",
            "Status",
            vec!["Active".to_string(), "Inactive".to_string()],
        )
        .optional(),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.warehouses.list().await;
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
    Ok(success_response(state.services.warehouses.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    require(&user, "write:partners")?;
    let values = form_definition().validate_full(&json_object(body)?)?;
    let input: CreateWarehouse = parse_payload(values)?;
    let created = state
        .services
        .warehouses
        .create(&user.username, input)
        .await?;
    Ok(created_response(created))
}

async fn update(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    require(&user, "write:partners")?;
    let values = form_definition().validate_partial(&json_object(body)?)?;
    let input: UpdateWarehouse = parse_payload(values)?;
    let updated = state
        .services
        .warehouses
        .update(&user.username, id, input)
        .await?;
    Ok(success_response(updated))
}

async fn remove(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&user, "write:partners")?;
    state.services.warehouses.delete(id).await?;
    Ok(no_content_response())
}
