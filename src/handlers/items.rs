//! Inventory items screen: searchable table, add/edit modals driven by the
//! form definition, no workflow chain.

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
use crate::models::Item;
use crate::services::{CreateItem, UpdateItem};
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

fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("reference", "Reference", |i: &Item| i.reference.clone()),
        Column::new("name", "Name", |i: &Item| i.name.clone()),
        Column::new("category", "Category", |i: &Item| i.category.clone()),
        Column::new("quantity", "Quantity", |i: &Item| i.quantity.to_string()),
        Column::new("unit", "Unit", |i: &Item| i.unit.clone()),
        Column::new("warehouse", "Warehouse", |i: &Item| i.warehouse.clone()),
        Column::new("supplier", "Supplier", |i: &Item| i.supplier.clone()),
        Column::new("status", "Status", |i: &Item| i.status.to_string()),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let warehouses = store.warehouses.iter().map(|w| w.name.clone()).collect();
    let suppliers = store.suppliers.iter().map(|s| s.name.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::text("name", "Name"),
        FieldDescriptor::text("category", "Category"),
        FieldDescriptor::text("unit", "Unit"),
        FieldDescriptor::number("quantity", "Quantity"),
        FieldDescriptor::number("reorder_level", "Reorder Level"),
        FieldDescriptor::select("warehouse", "Warehouse", warehouses),
        FieldDescriptor::datalist("supplier", "Supplier", suppliers),
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
    let records = state.services.items.list().await;
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
    Ok(success_response(state.services.items.get(id).await?))
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
    let input: CreateItem = parse_payload(values)?;
    let created = state.services.items.create(&user.username, input).await?;
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
    let input: UpdateItem = parse_payload(values)?;
    let updated = state
        .services
        .items
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
    state.services.items.delete(id).await?;
    Ok(no_content_response())
}
