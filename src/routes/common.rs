//! Service routes: health, root metadata, and the not-found fallback.

use crate::routes::resource::RESOURCE_PREFIX;
use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
struct NotFoundBody {
    error: &'static str,
    message: &'static str,
    path: String,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "OK",
        message: "Server is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to CRUD API",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "resources": RESOURCE_PREFIX
        }
    }))
}

/// 404 for any path (or method) no route handles.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Not Found",
            message: "The requested resource does not exist",
            path: uri.path().to_string(),
        }),
    )
}

/// GET /health and GET /.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/", get(root).fallback(not_found))
}
