//! Error types for the Fleetop CLI

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for Fleetop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// Whether the user has to sign in again before retrying.
    pub fn requires_sign_in(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError::Unauthenticated | ApiError::AuthenticationFailed(_))
        )
    }
}

/// API-related errors
///
/// Every non-2xx response is decoded into exactly one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token is stored; raised before any request is sent.
    #[error("Not signed in. No access token is stored.")]
    Unauthenticated,

    /// The backend rejected the token (401/403). Stored credentials are gone.
    #[error("Authentication failed (status {0}). Stored credentials were cleared.")]
    AuthenticationFailed(u16),

    #[error("Validation error: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Backend-supplied `detail` message, surfaced as-is.
    #[error("{detail}")]
    Detail { status: u16, detail: String },

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// One entry of a 422 `detail` list: `{ "loc": [...], "msg": "..." }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    /// Path to the offending field; segments are strings or list indices
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,

    pub msg: String,
}

impl FieldError {
    /// Dotted field path, e.g. `body.items.0.name`
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path(), self.msg)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Response cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache IO error: {0}")]
    Io(String),

    #[error("Cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
