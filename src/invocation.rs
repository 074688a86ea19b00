use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Extensions;
use lambda_http::request::RequestContext;
use lambda_http::Context;
use serde_json::Value;
use std::convert::Infallible;

use crate::claims::Claims;
use crate::error::ClaimsError;

/// What a handler gets to know about its invocation.
///
/// Extraction never rejects: a missing identity is reported through `claims`
/// and each handler decides how to degrade.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Correlation id of this call. The Lambda runtime id when available,
    /// otherwise the API Gateway request id, otherwise empty.
    pub request_id: String,
    pub claims: Result<Claims, ClaimsError>,
}

impl Invocation {
    pub fn from_extensions(extensions: &Extensions) -> Self {
        let gateway = extensions
            .get::<RequestContext>()
            .map(|context| serde_json::to_value(context).map_err(ClaimsError::from));

        let runtime_id = extensions
            .get::<Context>()
            .map(|context| context.request_id.clone())
            .filter(|id| !id.is_empty());
        let request_id = runtime_id
            .or_else(|| {
                gateway
                    .as_ref()
                    .and_then(|context| context.as_ref().ok())
                    .and_then(|context| context.get("requestId"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let claims = match gateway {
            Some(Ok(context)) => Claims::from_request_context(&context),
            Some(Err(err)) => Err(err),
            None => Err(ClaimsError::MissingRequestContext),
        };

        Self { request_id, claims }
    }
}

impl<S> FromRequestParts<S> for Invocation
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}
