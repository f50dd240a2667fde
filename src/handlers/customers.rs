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
use crate::models::Customer;
use crate::services::{CreateCustomer, UpdateCustomer};
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

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("reference", "Reference", |c: &Customer| c.reference.clone()),
        Column::new("name", "Name", |c: &Customer| c.name.clone()),
        Column::new("email", "Email", |c: &Customer| c.email.clone()),
        Column::new("phone", "Phone", |c: &Customer| c.phone.clone()),
        Column::new("address", "Address", |c: &Customer| c.address.clone()),
        Column::new("status", "Status", |c: &Customer| c.status.to_string()),
    ]
}

fn form_definition() -> FormDefinition {
    FormDefinition::new(vec![
        FieldDescriptor::text("name", "Name"),
        FieldDescriptor::text("email", "Email"),
        FieldDescriptor::text("phone", "Phone"),
        FieldDescriptor::text("address", "Address"),
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
    let records = state.services.customers.list().await;
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
    Ok(success_response(state.services.customers.get(id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    require(&user, "write:partners")?;
    let values = form_definition().validate_full(&json_object(body)?)?;
    let input: CreateCustomer = parse_payload(values)?;
    let created = state
        .services
        .customers
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
    let input: UpdateCustomer = parse_payload(values)?;
    let updated = state
        .services
        .customers
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
    state.services.customers.delete(id).await?;
    Ok(no_content_response())
}
