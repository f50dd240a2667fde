//! HTTP surface. One handler module per dashboard screen; every kind router
//! is mounted behind a guard declaring the permission the screen requires.
//! Mutating handlers additionally check the matching `write:*` permission.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{GuardState, RouteRequirement};
use crate::config::AppConfig;
use crate::services::AppServices;
use crate::store::SharedStore;

pub mod adjustments;
pub mod auth;
pub mod common;
pub mod customers;
pub mod deliveries;
pub mod health;
pub mod items;
pub mod orders;
pub mod purchase_orders;
pub mod returns;
pub mod staff_tasks;
pub mod suppliers;
pub mod transfers;
pub mod users;
pub mod warehouses;
pub mod withdrawals;

use crate::models::{
    BarcoderStatus, CheckerStatus, PickerStatus, TaggerStatus, TransferTaskStatus,
};

/// Shared application state: config, the store, and the service set wired to
/// it.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: SharedStore,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, store: SharedStore) -> Self {
        Self {
            config,
            services: AppServices::new(store.clone()),
            store,
        }
    }
}

/// Wrap a kind router with the auth guard for the given requirement.
fn guarded(
    router: Router<Arc<AppState>>,
    state: &Arc<AppState>,
    requirement: RouteRequirement,
) -> Router<Arc<AppState>> {
    router.route_layer(middleware::from_fn_with_state(
        GuardState {
            app: state.clone(),
            requirement,
        },
        crate::auth::guard,
    ))
}

/// The full application router.
pub fn api_router(state: Arc<AppState>) -> Router {
    let read_inventory = RouteRequirement::permission("read:inventory");
    let read_operations = RouteRequirement::permission("read:operations");
    let read_partners = RouteRequirement::permission("read:partners");
    let admin_users = RouteRequirement::permission("admin:users");

    let api = Router::new()
        .nest("/auth", auth::routes())
        .nest(
            "/items",
            guarded(items::routes(), &state, read_inventory),
        )
        .nest(
            "/adjustments",
            guarded(adjustments::routes(), &state, read_inventory),
        )
        .nest(
            "/withdrawals",
            guarded(withdrawals::routes(), &state, read_inventory),
        )
        .nest(
            "/transfers",
            guarded(transfers::routes(), &state, read_inventory),
        )
        .nest(
            "/purchase-orders",
            guarded(purchase_orders::routes(), &state, read_operations),
        )
        .nest(
            "/orders",
            guarded(orders::routes(), &state, read_operations),
        )
        .nest(
            "/deliveries",
            guarded(deliveries::routes(), &state, read_operations),
        )
        .nest(
            "/returns",
            guarded(returns::routes(), &state, read_operations),
        )
        .nest(
            "/pickers",
            guarded(
                staff_tasks::routes::<PickerStatus>(),
                &state,
                read_operations,
            ),
        )
        .nest(
            "/barcoders",
            guarded(
                staff_tasks::routes::<BarcoderStatus>(),
                &state,
                read_operations,
            ),
        )
        .nest(
            "/taggers",
            guarded(
                staff_tasks::routes::<TaggerStatus>(),
                &state,
                read_operations,
            ),
        )
        .nest(
            "/checkers",
            guarded(
                staff_tasks::routes::<CheckerStatus>(),
                &state,
                read_operations,
            ),
        )
        .nest(
            "/transfer-tasks",
            guarded(
                staff_tasks::routes::<TransferTaskStatus>(),
                &state,
                read_operations,
            ),
        )
        .nest(
            "/suppliers",
            guarded(suppliers::routes(), &state, read_partners),
        )
        .nest(
            "/warehouses",
            guarded(warehouses::routes(), &state, read_partners),
        )
        .nest(
            "/customers",
            guarded(customers::routes(), &state, read_partners),
        )
        .nest("/users", guarded(users::routes(), &state, admin_users));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
