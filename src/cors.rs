use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use crate::config::ApiConfig;

const ALLOWED_METHODS: &str = "GET,OPTIONS";

/// Which request headers a route lets the browser send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
}

impl RouteAccess {
    fn allowed_headers(self) -> &'static str {
        match self {
            RouteAccess::Public => "Content-Type",
            RouteAccess::Authenticated => "Content-Type,Authorization",
        }
    }
}

/// Origin only. Failure responses carry nothing more.
pub fn origin_headers(origin: &HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers
}

pub fn success_headers(origin: &HeaderValue, access: RouteAccess) -> HeaderMap {
    let mut headers = origin_headers(origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(access.allowed_headers()),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers
}

fn preflight(config: &ApiConfig, access: RouteAccess) -> impl IntoResponse {
    (
        StatusCode::OK,
        success_headers(&config.trusted_origin, access),
        Json(json!({})),
    )
}

pub async fn public_preflight(State(config): State<Arc<ApiConfig>>) -> impl IntoResponse {
    preflight(&config, RouteAccess::Public)
}

pub async fn authenticated_preflight(State(config): State<Arc<ApiConfig>>) -> impl IntoResponse {
    preflight(&config, RouteAccess::Authenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    fn origin() -> HeaderValue {
        HeaderValue::from_static("https://app.example.com")
    }

    #[test]
    fn failure_headers_carry_only_the_origin() {
        let headers = origin_headers(&origin());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "https://app.example.com");
    }

    #[test]
    fn success_headers_depend_on_route_access() {
        let public = success_headers(&origin(), RouteAccess::Public);
        assert_eq!(public[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(public[ACCESS_CONTROL_ALLOW_METHODS], "GET,OPTIONS");

        let authenticated = success_headers(&origin(), RouteAccess::Authenticated);
        assert_eq!(
            authenticated[ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type,Authorization"
        );
        assert_eq!(authenticated[ACCESS_CONTROL_ALLOW_ORIGIN], "https://app.example.com");
    }

    #[tokio::test]
    async fn preflight_answers_with_an_empty_json_object() {
        let config = Arc::new(ApiConfig::default());
        let response = authenticated_preflight(State(config)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type,Authorization"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{}");
    }
}
