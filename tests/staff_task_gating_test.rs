//! Assignment gating on staff tasks: an unassigned task exposes no workflow
//! action and refuses to advance; once assigned the chain runs, and the
//! barcoder completion hook fills in the scanned quantity.

mod common;

use axum::http::StatusCode;
use common::{expect_json, response_json, TestApp, ADMIN};
use serde_json::json;

async fn create_task(app: &TestApp, path: &str, assignee: Option<&str>) -> String {
    let mut body = json!({
        "order_reference": "ORD-001",
        "warehouse": "Central",
        "quantity_expected": 40
    });
    if let Some(assignee) = assignee {
        body["assignee"] = json!(assignee);
    }
    let created = expect_json(
        app.post(path, ADMIN, body).await,
        StatusCode::CREATED,
    )
    .await;
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn unassigned_task_cannot_move() {
    let app = TestApp::new().await;
    let id = create_task(&app, "/api/v1/barcoders", None).await;

    let actions = response_json(
        app.get(&format!("/api/v1/barcoders/{id}/actions"), ADMIN)
            .await,
    )
    .await;
    assert!(actions["next_action"].is_null());

    let response = app
        .post(&format!("/api/v1/barcoders/{id}/advance"), ADMIN, json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Status stayed put.
    let task = response_json(app.get(&format!("/api/v1/barcoders/{id}"), ADMIN).await).await;
    assert_eq!(task["status"], "Pending");
}

#[tokio::test]
async fn effective_status_reads_no_assignment_in_the_table() {
    let app = TestApp::new().await;
    create_task(&app, "/api/v1/taggers", None).await;

    let page = response_json(app.get("/api/v1/taggers", ADMIN).await).await;
    let cells = page["rows"][0]["cells"].as_array().unwrap();
    assert!(cells.iter().any(|c| c == "No Assignment"));
}

#[tokio::test]
async fn assignment_unlocks_the_chain() {
    let app = TestApp::new().await;
    let id = create_task(&app, "/api/v1/barcoders", None).await;

    let assigned = expect_json(
        app.post(
            &format!("/api/v1/barcoders/{id}/assign"),
            ADMIN,
            json!({ "assignee": "tomas" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(assigned["assignee"], "tomas");

    let actions = response_json(
        app.get(&format!("/api/v1/barcoders/{id}/actions"), ADMIN)
            .await,
    )
    .await;
    assert_eq!(actions["next_action"]["action"], "Start Scanning");

    let started = response_json(
        app.post(&format!("/api/v1/barcoders/{id}/advance"), ADMIN, json!({}))
            .await,
    )
    .await;
    assert_eq!(started["status"], "Scanning");

    let finished = response_json(
        app.post(&format!("/api/v1/barcoders/{id}/advance"), ADMIN, json!({}))
            .await,
    )
    .await;
    assert_eq!(finished["status"], "Scanned");
    // Completion hook: every expected unit counts as scanned.
    assert_eq!(finished["quantity_done"], finished["quantity_expected"]);
}

#[tokio::test]
async fn reassignment_is_locked_once_work_started() {
    let app = TestApp::new().await;
    let id = create_task(&app, "/api/v1/pickers", Some("tomas")).await;

    let started = response_json(
        app.post(&format!("/api/v1/pickers/{id}/advance"), ADMIN, json!({}))
            .await,
    )
    .await;
    assert_eq!(started["status"], "Picking");

    let response = app
        .post(
            &format!("/api/v1/pickers/{id}/assign"),
            ADMIN,
            json!({ "assignee": "lena" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn blank_assignee_is_rejected() {
    let app = TestApp::new().await;
    let id = create_task(&app, "/api/v1/checkers", None).await;
    let response = app
        .post(
            &format!("/api/v1/checkers/{id}/assign"),
            ADMIN,
            json!({ "assignee": "   " }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
