//! Shared harness for the HTTP integration tests. Requests go through the
//! full router via `tower::ServiceExt::oneshot`, so guards, extractors and
//! error mapping are all exercised.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use warehouse_admin_api::models::Role;
use warehouse_admin_api::services::CreateUser;
use warehouse_admin_api::{config::AppConfig, handlers, seed, AppState, EntityStore};

/// Seeded login names, one per role.
pub const SUPERADMIN: &str = "root";
pub const ADMIN: &str = "amara";
pub const MANAGER: &str = "lena";
pub const OPERATOR: &str = "tomas";

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// App with only the user registry populated.
    pub async fn new() -> Self {
        let state = Arc::new(AppState::new(AppConfig::default(), EntityStore::new().shared()));
        for (username, role) in [
            (SUPERADMIN, Role::Superadmin),
            (ADMIN, Role::Admin),
            (MANAGER, Role::Manager),
            (OPERATOR, Role::Operator),
        ] {
            state
                .services
                .users
                .create(
                    "system",
                    CreateUser {
                        username: username.to_string(),
                        display_name: username.to_string(),
                        role,
                        permissions: None,
                    },
                )
                .await
                .expect("seed user");
        }
        Self {
            router: handlers::api_router(state),
        }
    }

    /// App with the full demo data set.
    pub async fn seeded() -> Self {
        let state = Arc::new(AppState::new(AppConfig::default(), EntityStore::new().shared()));
        seed::seed_demo_data(&state.services)
            .await
            .expect("seed demo data");
        Self {
            router: handlers::api_router(state),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("response")
    }

    pub async fn get(&self, uri: &str, token: &str) -> Response {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(token), Some(body))
            .await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> Response {
        self.request(Method::PUT, uri, Some(token), Some(body))
            .await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> Response {
        self.request(Method::DELETE, uri, Some(token), None).await
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body bytes")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json response")
}

pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    response_json(response).await
}
