use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use lambda_http::tracing;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::claims::Claims;
use crate::config::ApiConfig;
use crate::cors::{self, RouteAccess};
use crate::error::ClaimsError;
use crate::invocation::Invocation;

/// The identity claims echoed back to the caller, `null` where absent.
#[derive(Debug, Serialize, PartialEq)]
pub struct User {
    pub sub: Option<Value>,
    pub email: Option<Value>,
    pub email_verified: Option<Value>,
    pub username: Option<Value>,
    pub token_use: Option<Value>,
    pub auth_time: Option<Value>,
    pub iss: Option<Value>,
    pub exp: Option<Value>,
    pub iat: Option<Value>,
}

impl From<&Claims> for User {
    fn from(claims: &Claims) -> Self {
        let claim = |key: &str| claims.get(key).cloned();
        Self {
            sub: claim("sub"),
            email: claim("email"),
            email_verified: claim("email_verified"),
            username: claim("cognito:username"),
            token_use: claim("token_use"),
            auth_time: claim("auth_time"),
            iss: claim("iss"),
            exp: claim("exp"),
            iat: claim("iat"),
        }
    }
}

#[derive(Debug, Serialize)]
struct UserInfoResponse {
    success: bool,
    user: User,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct UserInfoFailureBody {
    success: bool,
    error: String,
    message: &'static str,
}

/// Claims extraction failed. Rendered as a 500 that only carries the origin header.
pub struct UserInfoFailure {
    cause: ClaimsError,
    origin: HeaderValue,
}

impl IntoResponse for UserInfoFailure {
    fn into_response(self) -> Response {
        let body = UserInfoFailureBody {
            success: false,
            error: self.cause.to_string(),
            message: "Failed to retrieve user information",
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            cors::origin_headers(&self.origin),
            Json(body),
        )
            .into_response()
    }
}

pub async fn user_info(
    State(config): State<Arc<ApiConfig>>,
    invocation: Invocation,
) -> Result<impl IntoResponse, UserInfoFailure> {
    let claims = invocation.claims.map_err(|cause| {
        tracing::warn!(request_id = %invocation.request_id, error = %cause, "user info without claims");
        UserInfoFailure {
            cause,
            origin: config.trusted_origin.clone(),
        }
    })?;
    tracing::info!(request_id = %invocation.request_id, "user info");

    let body = UserInfoResponse {
        success: true,
        user: User::from(&claims),
        message: "User information retrieved successfully",
    };

    Ok((
        StatusCode::OK,
        cors::success_headers(&config.trusted_origin, RouteAccess::Authenticated),
        Json(body),
    ))
}
