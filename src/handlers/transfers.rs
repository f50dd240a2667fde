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
use crate::models::Transfer;
use crate::services::{CreateTransfer, UpdateTransfer};
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

fn columns() -> Vec<Column<Transfer>> {
    vec![
        Column::new("reference", "Reference", |t: &Transfer| t.reference.clone()),
        Column::new("from_warehouse", "From", |t: &Transfer| {
            t.from_warehouse.clone()
        }),
        Column::new("to_warehouse", "To", |t: &Transfer| t.to_warehouse.clone()),
        Column::new("item", "Item", |t: &Transfer| t.item.clone()),
        Column::new("quantity", "Quantity", |t: &Transfer| {
            t.quantity.to_string()
        }),
        Column::new("status", "Status", |t: &Transfer| t.status.to_string()),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let warehouses: Vec<String> = store.warehouses.iter().map(|w| w.name.clone()).collect();
    let items = store.items.iter().map(|i| i.name.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::select("from_warehouse", "From Warehouse", warehouses.clone()),
        FieldDescriptor::select("to_warehouse", "To Warehouse", warehouses),
        FieldDescriptor::datalist("item", "Item", items),
        FieldDescriptor::number("quantity", "Quantity"),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.transfers.list().await;
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
    Ok(success_response(state.services.transfers.get(id).await?))
}

async fn actions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let next = state.services.transfers.next_action(id).await?;
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
    let input: CreateTransfer = parse_payload(values)?;
    let created = state
        .services
        .transfers
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
    let input: UpdateTransfer = parse_payload(values)?;
    let updated = state
        .services
        .transfers
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
    state.services.transfers.delete(id).await?;
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
        .transfers
        .advance(&user.username, id)
        .await?;
    Ok(success_response(updated))
}
