use axum::extract::State;
use axum::http::header::ALLOW;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::cors;
use crate::health::health_check;
use crate::hello::hello;
use crate::user_info::user_info;

type SharedConfig = Arc<ApiConfig>;

async fn not_found(State(config): State<SharedConfig>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        cors::origin_headers(&config.trusted_origin),
        Json(json!({ "message": "Not Found" })),
    )
}

/// Every route serves the same verbs.
const ALLOWED: &str = "GET,HEAD,OPTIONS";

async fn method_not_allowed(State(config): State<SharedConfig>) -> impl IntoResponse {
    let mut headers = cors::origin_headers(&config.trusted_origin);
    headers.insert(ALLOW, HeaderValue::from_static(ALLOWED));
    (
        StatusCode::METHOD_NOT_ALLOWED,
        headers,
        Json(json!({ "message": "Method Not Allowed" })),
    )
}

pub fn router(config: ApiConfig) -> Router {
    let public: Router<SharedConfig> =
        Router::new().route("/health", get(health_check).options(cors::public_preflight));
    let authenticated: Router<SharedConfig> = Router::new()
        .route("/hello", get(hello).options(cors::authenticated_preflight))
        .route(
            "/user-info",
            get(user_info).options(cors::authenticated_preflight),
        );

    Router::new()
        .merge(public)
        .merge(authenticated)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(Arc::new(config))
}
