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
use crate::models::Delivery;
use crate::services::{CreateDelivery, UpdateDelivery};
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

fn columns() -> Vec<Column<Delivery>> {
    vec![
        Column::new("reference", "Reference", |d: &Delivery| d.reference.clone()),
        Column::new("order_reference", "Order", |d: &Delivery| {
            d.order_reference.clone()
        }),
        Column::new("customer", "Customer", |d: &Delivery| d.customer.clone()),
        Column::new("address", "Address", |d: &Delivery| d.address.clone()),
        Column::new("courier", "Courier", |d: &Delivery| d.courier.clone()),
        Column::new("status", "Status", |d: &Delivery| d.status.to_string()),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let orders = store.orders.iter().map(|o| o.reference.clone()).collect();
    let customers = store.customers.iter().map(|c| c.name.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::datalist("order_reference", "Order", orders),
        FieldDescriptor::datalist("customer", "Customer", customers),
        FieldDescriptor::text("address", "Address"),
        FieldDescriptor::text("courier", "Courier"),
    ])
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    let records = state.services.deliveries.list().await;
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
    Ok(success_response(state.services.deliveries.get(id).await?))
}

async fn actions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let next = state.services.deliveries.next_action(id).await?;
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
    let input: CreateDelivery = parse_payload(values)?;
    let created = state
        .services
        .deliveries
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
    let input: UpdateDelivery = parse_payload(values)?;
    let updated = state
        .services
        .deliveries
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
    state.services.deliveries.delete(id).await?;
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
        .deliveries
        .advance(&user.username, id)
        .await?;
    Ok(success_response(updated))
}
