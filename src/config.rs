use axum::http::HeaderValue;
use lambda_http::tracing::Level;
use std::env;

use crate::error::ServerError;

pub const DEFAULT_TRUSTED_ORIGIN: &str = "https://gonzalo-munoz.com";
pub const DEFAULT_SERVICE_NAME: &str = "gonzalo-munoz-api";

/// Deployment settings shared by every handler.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The one origin allowed to read responses cross-origin.
    pub trusted_origin: HeaderValue,
    /// Reported by the health endpoint.
    pub service_name: String,
    pub log_level: Level,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin = lookup("TRUSTED_ORIGIN").unwrap_or_else(|| DEFAULT_TRUSTED_ORIGIN.to_string());
        let trusted_origin = HeaderValue::from_str(origin.trim()).map_err(|err| {
            ServerError::Configuration(format!("TRUSTED_ORIGIN is not a valid header value: {err}"))
        })?;
        if trusted_origin.is_empty() {
            return Err(ServerError::Configuration(
                "TRUSTED_ORIGIN must not be empty".to_string(),
            ));
        }

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        if service_name.trim().is_empty() {
            return Err(ServerError::Configuration(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level.trim().parse().map_err(|_| {
                ServerError::Configuration(format!("LOG_LEVEL `{level}` is not a log level"))
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            trusted_origin,
            service_name: service_name.trim().to_string(),
            log_level,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            trusted_origin: HeaderValue::from_static(DEFAULT_TRUSTED_ORIGIN),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: Level::INFO,
        }
    }
}
