use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Why the authorizer claims of a request could not be resolved.
///
/// The `Display` text is returned to the caller as-is, so it must never
/// contain claim values.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClaimsError {
    #[error("Request context not found")]
    MissingRequestContext,
    #[error("Request context unreadable: {0}")]
    UnreadableContext(String),
    #[error("Claims not found")]
    NotFound,
    #[error("Malformed claims: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ClaimsError {
    fn from(err: serde_json::Error) -> Self {
        ClaimsError::UnreadableContext(err.to_string())
    }
}
