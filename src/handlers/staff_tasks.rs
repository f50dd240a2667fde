//! One handler set for all five staff-assignment screens (pickers,
//! barcoders, taggers, checkers, transfer crews). The routers are
//! instantiated per status chain in [`super::api_router`]; the status shown
//! in the table is the effective status, which reads "No Assignment" until
//! someone is assigned.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::ApiError;
use crate::forms::{FieldDescriptor, FormDefinition};
use crate::models::{
    BarcoderStatus, CheckerStatus, PickerStatus, Record, StaffTask, TaggerStatus,
    TransferTaskStatus,
};
use crate::services::{AppServices, CreateStaffTask, StaffTaskService, TaskKind, UpdateStaffTask};
use crate::table::{self, Column, TableQuery};

use super::common::{
    created_response, json_object, no_content_response, parse_payload, require, success_response,
};
use super::AppState;

/// Routing hook: which service field drives this task kind.
pub trait TaskRoutes: TaskKind + Serialize
where
    StaffTask<Self>: Record,
{
    fn service(services: &AppServices) -> &StaffTaskService<Self>;
}

impl TaskRoutes for PickerStatus {
    fn service(services: &AppServices) -> &StaffTaskService<Self> {
        &services.picker_tasks
    }
}

impl TaskRoutes for BarcoderStatus {
    fn service(services: &AppServices) -> &StaffTaskService<Self> {
        &services.barcoder_tasks
    }
}

impl TaskRoutes for TaggerStatus {
    fn service(services: &AppServices) -> &StaffTaskService<Self> {
        &services.tagger_tasks
    }
}

impl TaskRoutes for CheckerStatus {
    fn service(services: &AppServices) -> &StaffTaskService<Self> {
        &services.checker_tasks
    }
}

impl TaskRoutes for TransferTaskStatus {
    fn service(services: &AppServices) -> &StaffTaskService<Self> {
        &services.transfer_tasks
    }
}

pub fn routes<S>() -> Router<Arc<AppState>>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route("/form", get(form))
        .route("/:id", get(get_one::<S>).put(update::<S>).delete(remove::<S>))
        .route("/:id/actions", get(actions::<S>))
        .route("/:id/assign", post(assign::<S>))
        .route("/:id/advance", post(advance::<S>))
}

fn columns<S>() -> Vec<Column<StaffTask<S>>>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    vec![
        Column::new("reference", "Reference", |t: &StaffTask<S>| {
            t.reference.clone()
        }),
        Column::new("order_reference", "Order", |t: &StaffTask<S>| {
            t.order_reference.clone()
        }),
        Column::new("warehouse", "Warehouse", |t: &StaffTask<S>| {
            t.warehouse.clone()
        }),
        Column::new("assignee", "Assignee", |t: &StaffTask<S>| {
            t.assignee.clone().unwrap_or_default()
        }),
        Column::new("quantity", "Done / Expected", |t: &StaffTask<S>| {
            format!("{} / {}", t.quantity_done, t.quantity_expected)
        }),
        Column::new("status", "Status", |t: &StaffTask<S>| {
            t.effective_status().to_string()
        }),
    ]
}

async fn form_definition(state: &AppState) -> FormDefinition {
    let store = state.store.read().await;
    let orders = store.orders.iter().map(|o| o.reference.clone()).collect();
    let warehouses = store.warehouses.iter().map(|w| w.name.clone()).collect();
    let staff = store.users.iter().map(|u| u.username.clone()).collect();
    FormDefinition::new(vec![
        FieldDescriptor::datalist("order_reference", "Order", orders),
        FieldDescriptor::select("warehouse", "Warehouse", warehouses),
        FieldDescriptor::number("quantity_expected", "Expected Quantity"),
        FieldDescriptor::datalist("assignee", "Assignee", staff).optional(),
    ])
}

#[derive(Debug, Deserialize)]
struct AssignRequest {
    assignee: String,
}

async fn list<S>(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    let records = S::service(&state.services).list().await;
    let page = table::project(
        &records,
        &columns::<S>(),
        &query,
        state.config.default_page_size,
    );
    Ok(success_response(page))
}

async fn form(State(state): State<Arc<AppState>>) -> Response {
    success_response(form_definition(&state).await)
}

async fn get_one<S>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    Ok(success_response(S::service(&state.services).get(id).await?))
}

async fn actions<S>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    let next = S::service(&state.services).next_action(id).await?;
    Ok(success_response(json!({ "next_action": next })))
}

async fn create<S>(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    require(&user, "write:operations")?;
    let values = form_definition(&state)
        .await
        .validate_full(&json_object(body)?)?;
    let input: CreateStaffTask = parse_payload(values)?;
    let created = S::service(&state.services)
        .create(&user.username, input)
        .await?;
    Ok(created_response(created))
}

async fn update<S>(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    require(&user, "write:operations")?;
    let values = form_definition(&state)
        .await
        .validate_partial(&json_object(body)?)?;
    let input: UpdateStaffTask = parse_payload(values)?;
    let updated = S::service(&state.services)
        .update(&user.username, id, input)
        .await?;
    Ok(success_response(updated))
}

async fn remove<S>(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    require(&user, "write:operations")?;
    S::service(&state.services).delete(id).await?;
    Ok(no_content_response())
}

async fn assign<S>(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignRequest>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    require(&user, "write:operations")?;
    let updated = S::service(&state.services)
        .assign(&user.username, id, body.assignee)
        .await?;
    Ok(success_response(updated))
}

async fn advance<S>(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError>
where
    S: TaskRoutes,
    StaffTask<S>: Record,
{
    require(&user, "write:operations")?;
    let updated = S::service(&state.services)
        .advance(&user.username, id)
        .await?;
    Ok(success_response(updated))
}
