use axum::response::Response;
use serde_json::json;

use super::common::success_response;

pub async fn health_check() -> Response {
    success_response(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
