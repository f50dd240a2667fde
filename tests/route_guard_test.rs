//! Route guard behavior: bearer resolution against the user registry,
//! per-screen read permissions, write permission checks on mutations, and
//! the superadmin wildcard.

mod common;

use axum::http::{Method, StatusCode};
use common::{expect_json, TestApp, ADMIN, MANAGER, OPERATOR, SUPERADMIN};
use serde_json::json;

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/api/v1/items", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.get("/api/v1/items", "nobody").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn operator_reads_but_cannot_write_inventory() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/items", OPERATOR).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post(
            "/api/v1/items",
            OPERATOR,
            json!({
                "name": "Strap",
                "category": "Hardware",
                "unit": "pcs",
                "quantity": 10,
                "reorder_level": 2,
                "warehouse": "Central",
                "supplier": "Nordic Components"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn operator_has_no_partner_screens() {
    let app = TestApp::new().await;
    let response = app.get("/api/v1/suppliers", OPERATOR).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_admin_is_admin_only() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/users", MANAGER).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.get("/api/v1/users", ADMIN).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Superadmin holds the wildcard grant.
    let response = app.get("/api/v1/users", SUPERADMIN).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_can_create_users() {
    let app = TestApp::new().await;
    let created = expect_json(
        app.post(
            "/api/v1/users",
            ADMIN,
            json!({
                "username": "nadia",
                "display_name": "Nadia Sol",
                "role": "operator"
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["role"], "operator");
    // Role defaults applied when no explicit permission list is given.
    assert!(created["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p.as_str().unwrap().starts_with("read:")));
}

#[tokio::test]
async fn login_round_trip() {
    let app = TestApp::new().await;

    let body = expect_json(
        app.request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": ADMIN })),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["token"], ADMIN);
    assert_eq!(body["user"]["role"], "admin");

    let me = expect_json(
        app.get("/api/v1/auth/me", ADMIN).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(me["username"], ADMIN);

    let response = app
        .request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "ghost" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;
    let body = expect_json(
        app.request(Method::GET, "/health", None, None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["status"], "ok");
}
