//! Identity claims attached to a request by the API Gateway authorizer.
//!
//! Claims are already verified upstream. This module only finds them in the
//! request context and hands out individual values.

use serde_json::{Map, Value};

use crate::error::ClaimsError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Resolves claims from a serialized API Gateway request context.
    ///
    /// Lookup order under `authorizer`: `claims` (REST API with a Cognito
    /// authorizer), `jwt.claims` (HTTP API with a JWT authorizer),
    /// `lambda.claims`, `lambda` (HTTP API with a Lambda authorizer), and
    /// finally the authorizer map itself (REST API with a Lambda authorizer).
    pub fn from_request_context(context: &Value) -> Result<Self, ClaimsError> {
        let authorizer = match context.get("authorizer") {
            None | Some(Value::Null) => return Err(ClaimsError::NotFound),
            Some(Value::Object(authorizer)) => authorizer,
            Some(other) => {
                return Err(ClaimsError::Malformed(format!(
                    "authorizer is {}, expected an object",
                    describe(other)
                )))
            }
        };

        let nested = present(authorizer.get("claims"))
            .or_else(|| present(authorizer.get("jwt").and_then(|jwt| jwt.get("claims"))))
            .or_else(|| present(authorizer.get("lambda").and_then(|lambda| lambda.get("claims"))))
            .or_else(|| present(authorizer.get("lambda")));

        let claims = match nested {
            Some(Value::Object(claims)) => claims.clone(),
            Some(other) => {
                return Err(ClaimsError::Malformed(format!(
                    "claims are {}, expected an object",
                    describe(other)
                )))
            }
            None => authorizer
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        };

        if claims.is_empty() {
            return Err(ClaimsError::NotFound);
        }
        Ok(Self(claims))
    }

    /// A claim value as given by the authorizer. Explicit `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// A scalar claim rendered as text: strings verbatim, numbers and booleans
    /// as their JSON text. Anything else is treated as absent.
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(text) => Some(text.clone()),
            value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
