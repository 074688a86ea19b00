use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use lambda_http::tracing;
use serde::Serialize;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::cors::{self, RouteAccess};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
    pub message: &'static str,
}

/// Public liveness check. Reads nothing from the request and cannot fail.
pub async fn health_check(State(config): State<Arc<ApiConfig>>) -> impl IntoResponse {
    tracing::info!(service = %config.service_name, "health check");

    let body = HealthResponse {
        status: "healthy",
        service: config.service_name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        message: "API is running",
    };

    (
        StatusCode::OK,
        cors::success_headers(&config.trusted_origin, RouteAccess::Public),
        Json(body),
    )
}
