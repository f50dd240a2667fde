//! Full lifecycle of a stock adjustment over the HTTP surface: create while
//! Open, advance through Post and Approve, and verify the edit/delete locks
//! once the chain has moved on.

mod common;

use axum::http::StatusCode;
use common::{expect_json, response_json, TestApp, ADMIN};
use serde_json::json;

#[tokio::test]
async fn adjustment_walks_the_post_approve_chain() {
    let app = TestApp::new().await;

    let created = expect_json(
        app.post(
            "/api/v1/adjustments",
            ADMIN,
            json!({
                "warehouse": "Central",
                "item": "Steel Bracket M6",
                "quantity_delta": -12,
                "reasons": ["cycle count variance"]
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["status"], "Open");
    assert_eq!(created["reference"], "ADJ-001");
    assert_eq!(created["quantity_delta"], -12);
    let id = created["id"].as_str().unwrap().to_string();

    let actions = expect_json(
        app.get(&format!("/api/v1/adjustments/{id}/actions"), ADMIN)
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(actions["next_action"]["action"], "Post");
    assert_eq!(actions["next_action"]["to"], "Pending");

    let posted = expect_json(
        app.post(&format!("/api/v1/adjustments/{id}/advance"), ADMIN, json!({}))
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(posted["status"], "Pending");

    let actions = expect_json(
        app.get(&format!("/api/v1/adjustments/{id}/actions"), ADMIN)
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(actions["next_action"]["action"], "Approve");

    let approved = expect_json(
        app.post(&format!("/api/v1/adjustments/{id}/advance"), ADMIN, json!({}))
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(approved["status"], "Done");
    assert_eq!(approved["approved_by"], ADMIN);

    // Chain exhausted: no button, and advancing again conflicts.
    let actions = expect_json(
        app.get(&format!("/api/v1/adjustments/{id}/actions"), ADMIN)
            .await,
        StatusCode::OK,
    )
    .await;
    assert!(actions["next_action"].is_null());
    let response = app
        .post(&format!("/api/v1/adjustments/{id}/advance"), ADMIN, json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn adjustment_locks_after_leaving_open() {
    let app = TestApp::new().await;

    let created = response_json(
        app.post(
            "/api/v1/adjustments",
            ADMIN,
            json!({
                "warehouse": "Central",
                "item": "Pallet Wrap Roll",
                "quantity_delta": 5
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    // While Open both edit and delete work.
    let updated = expect_json(
        app.put(
            &format!("/api/v1/adjustments/{id}"),
            ADMIN,
            json!({ "quantity_delta": 7 }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["quantity_delta"], 7);

    app.post(&format!("/api/v1/adjustments/{id}/advance"), ADMIN, json!({}))
        .await;

    let response = app
        .put(
            &format!("/api/v1/adjustments/{id}"),
            ADMIN,
            json!({ "quantity_delta": 9 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.delete(&format!("/api/v1/adjustments/{id}"), ADMIN).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post(
            "/api/v1/adjustments",
            ADMIN,
            json!({ "warehouse": "Central" }),
        )
        .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert!(body["message"].as_str().unwrap().contains("item"));
}

#[tokio::test]
async fn unknown_adjustment_is_404() {
    let app = TestApp::new().await;
    let response = app
        .get(
            "/api/v1/adjustments/00000000-0000-0000-0000-000000000000",
            ADMIN,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
