//! Root HTTP Routes
//!
//! Greeting, mirror and health check endpoints. None of these touch the store.

use axum::{
    extract::{rejection::PathRejection, Path},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::envelope::Envelope;
use super::errors::ApiResult;

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create root routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(hello_handler))
        .route("/mirror/:name", get(mirror_handler))
        .route("/health", get(health_handler))
}

async fn hello_handler() -> ApiResult<Envelope> {
    Ok(Envelope::ok(&json!({"content": "hello world!"}))?)
}

async fn mirror_handler(name: Result<Path<String>, PathRejection>) -> ApiResult<Envelope> {
    let Path(name) = name?;
    Ok(Envelope::ok(&json!({ "name": name }))?)
}

async fn health_handler() -> ApiResult<Envelope> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(Envelope::ok(&response)?)
}
