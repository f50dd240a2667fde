//! Stock adjustments screen. Records are editable only while Open; the
//! Post/Approve chain moves through `/:id/advance`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::ApiError;
use crate::forms::{FieldDescriptor, FormDefinition};
use crate::models::Adjustment;
use crate::services::{CreateAdjustment, UpdateAdjustment};
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
        .route("/:id/actions", get(actions))
        .route("/:id/advance", post(advance))
}

fn columns() -> Vec<Column<Adjustment>> {
    vec![
        Column::new("reference", "Reference", |a: &Adjustment| {
            a.reference.clone()
        }),
        Column::new("warehouse", "Warehouse", |a: &Adjustment| {
            a.warehouse.clone()
        }),
        Column::new("item", "Item", |a: &Adjustment| a.item.clone()),
        Column::new("quantity_delta", "Quantity Change", |a: &Adjustment| {
            a.quantity_delta.to_string()
        }),
        Column::new("reasons", "Reasons", |a: &Adjustment| a.reasons.join(", ")),
        Column::new("status", "Status", |a: &Adjustment| a.status.to_string()),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let warehouses = store.warehouses.iter().map(|w| w.name.clone()).collect();
    let items = store.items.iter().map(|i| i.name.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::select("warehouse", "Warehouse", warehouses),
        FieldDescriptor::datalist("item", "Item", items),
        // Deltas may be negative, so this is not a clamped number field.
        FieldDescriptor::text("quantity_delta", "Quantity Change"),
        FieldDescriptor::text("reasons", "Reasons").optional(),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.adjustments.list().await;
    let page = table::project(&records, &columns(), &query, state.config.default_page_size);
    Ok(success_response(page))
}

async fn form(State(state): State<Arc<AppState>>) -> Response {
    success_response(form_definition(&state).await)
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    Ok(success_response(state.services.adjustments.get(id).await?))
}

async fn actions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let next = state.services.adjustments.next_action(id).await?;
    Ok(success_response(json!({ "next_action": next })))
}

async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    require(&user, "write:inventory")?;
    let values = form_definition(&state)
        .await
        .validate_full(&json_object(body)?)?;
    let input: CreateAdjustment = parse_payload(values)?;
    let created = state
        .services
        .adjustments
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
    require(&user, "write:inventory")?;
    let values = form_definition(&state)
        .await
        .validate_partial(&json_object(body)?)?;
    let input: UpdateAdjustment = parse_payload(values)?;
    let updated = state
        .services
        .adjustments
        .update(&user.username, id, input)
        .await?;
    Ok(success_response(updated))
}

async fn remove(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&user, "write:inventory")?;
    state.services.adjustments.delete(id).await?;
    Ok(no_content_response())
}

async fn advance(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&user, "write:inventory")?;
    let updated = state
        .services
        .adjustments
        .advance(&user.username, id)
        .await?;
    Ok(success_response(updated))
}
