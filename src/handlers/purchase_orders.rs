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
use crate::models::PurchaseOrder;
use crate::services::{CreatePurchaseOrder, UpdatePurchaseOrder};
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

fn columns() -> Vec<Column<PurchaseOrder>> {
    vec![
        Column::new("reference", "Reference", |p: &PurchaseOrder| {
            p.reference.clone()
        }),
        Column::new("supplier", "Supplier", |p: &PurchaseOrder| {
            p.supplier.clone()
        }),
        Column::new("warehouse", "Warehouse", |p: &PurchaseOrder| {
            p.warehouse.clone()
        }),
        Column::new("item", "Item", |p: &PurchaseOrder| p.item.clone()),
        Column::new("quantity", "Quantity", |p: &PurchaseOrder| {
            p.quantity.to_string()
        }),
        Column::new("expected_date", "Expected", |p: &PurchaseOrder| {
            p.expected_date
                .map(|d| d.to_string())
                .unwrap_or_default()
        }),
        Column::new("status", "Status", |p: &PurchaseOrder| {
            p.status.to_string()
        }),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let suppliers = store.suppliers.iter().map(|s| s.name.clone()).collect();
    let warehouses = store.warehouses.iter().map(|w| w.name.clone()).collect();
    let items = store.items.iter().map(|i| i.name.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::select("supplier", "Supplier", suppliers),
        FieldDescriptor::select("warehouse", "Warehouse", warehouses),
        FieldDescriptor::datalist("item", "Item", items),
        FieldDescriptor::number("quantity", "Quantity"),
        FieldDescriptor::text("expected_date", "Expected Date").optional(),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.purchase_orders.list().await;
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
    Ok(success_response(
        state.services.purchase_orders.get(id).await?,
    ))
}

async fn actions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let next = state.services.purchase_orders.next_action(id).await?;
    Ok(success_response(json!({ "next_action": next })))
}

async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    require(&user, "write:operations")?;
    let values = form_definition(&state)
        .await
        .validate_full(&json_object(body)?)?;
    let input: CreatePurchaseOrder = parse_payload(values)?;
    let created = state
        .services
        .purchase_orders
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
    require(&user, "write:operations")?;
    let values = form_definition(&state)
        .await
        .validate_partial(&json_object(body)?)?;
    let input: UpdatePurchaseOrder = parse_payload(values)?;
    let updated = state
        .services
        .purchase_orders
        .update(&user.username, id, input)
        .await?;
    Ok(success_response(updated))
}

async fn remove(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&user, "write:operations")?;
    state.services.purchase_orders.delete(id).await?;
    Ok(no_content_response())
}

async fn advance(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&user, "write:operations")?;
    let updated = state
        .services
        .purchase_orders
        .advance(&user.username, id)
        .await?;
    Ok(success_response(updated))
}
