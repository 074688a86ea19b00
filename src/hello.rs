use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lambda_http::tracing;
use serde::Serialize;
use std::sync::Arc;

use crate::claims::Claims;
use crate::config::ApiConfig;
use crate::cors::{self, RouteAccess};
use crate::invocation::Invocation;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    pub email: String,
    pub username: String,
    pub sub: String,
}

impl UserInfo {
    fn from_claims(claims: Option<&Claims>) -> Self {
        let claim = |key: &str| {
            claims
                .and_then(|claims| claims.get_text(key))
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        Self {
            email: claim("email"),
            username: claim("cognito:username"),
            sub: claim("sub"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloResponse {
    pub message: String,
    pub user_info: UserInfo,
    /// Carries the invocation id, not a time. The field name is kept for
    /// existing clients.
    pub timestamp: String,
}

/// Greets the caller by email. Missing identity degrades to `Unknown`.
pub async fn hello(
    State(config): State<Arc<ApiConfig>>,
    invocation: Invocation,
) -> impl IntoResponse {
    let claims = match &invocation.claims {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(request_id = %invocation.request_id, reason = %err, "greeting without identity");
            None
        }
    };
    let user_info = UserInfo::from_claims(claims);
    tracing::info!(request_id = %invocation.request_id, "hello");

    let body = HelloResponse {
        message: format!("Hello, {}!", user_info.email),
        user_info,
        timestamp: invocation.request_id,
    };

    (
        StatusCode::OK,
        cors::success_headers(&config.trusted_origin, RouteAccess::Authenticated),
        Json(body),
    )
}
