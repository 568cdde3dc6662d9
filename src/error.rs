//! Error types for the Pluggy API client.
//!
//! Every failure surfaced by this crate is an [`Error`]. API rejections
//! (non-2xx responses) are split by HTTP status into dedicated variants
//! that all carry an [`ApiError`], so callers can branch on the kind while
//! still reading the server's `code`, `codeDescription` and `message`.
//!
//! Three families of failure are distinguished:
//!
//! - the server rejected the request (`BadRequest` .. `Api`),
//! - the server answered with a body that does not match the documented
//!   schema (`SchemaValidation`),
//! - the server was never reached (`Network`).

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Pluggy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error details reported by the API for a non-2xx response.
///
/// Mirrors the API's global error body
/// `{"code": 404, "codeDescription": "ITEM_NOT_FOUND", "message": "item not found"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Error code from the body, or the HTTP status when absent
    pub code: i64,
    /// Symbolic code description, empty when absent
    pub code_description: String,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// Build the error details from a failed response's status and body text.
    ///
    /// A JSON object body contributes whichever of `code`, `codeDescription`
    /// and `message` it has; missing fields fall back to the status code,
    /// an empty string and the reason phrase. Any other body is kept as the
    /// message verbatim, or replaced by the reason phrase when empty.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let status_code = status.as_u16();

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => Self {
                status: status_code,
                code: fields
                    .get("code")
                    .and_then(Value::as_i64)
                    .unwrap_or(i64::from(status_code)),
                code_description: fields
                    .get("codeDescription")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                message: fields
                    .get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or(reason),
            },
            _ => Self {
                status: status_code,
                code: i64::from(status_code),
                code_description: String::new(),
                message: if body.is_empty() { reason } else { body.to_string() },
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code_description.is_empty() {
            write!(f, "status={}, code={}, message={}", self.status, self.code, self.message)
        } else {
            write!(
                f,
                "status={}, code={} ({}), message={}",
                self.status, self.code, self.code_description, self.message
            )
        }
    }
}

/// The main error type for all Pluggy API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP 400
    #[error("Bad request: {0}")]
    BadRequest(ApiError),

    /// HTTP 401 (invalid credentials, expired API key, disabled client)
    #[error("Unauthorized: {0}")]
    Unauthorized(ApiError),

    /// HTTP 404
    #[error("Not found: {0}")]
    NotFound(ApiError),

    /// HTTP 409 (item creation limit, update requested too early, ...)
    #[error("Conflict: {0}")]
    Conflict(ApiError),

    /// HTTP 5xx
    #[error("Internal server error: {0}")]
    InternalServer(ApiError),

    /// Any other non-2xx status
    #[error("API error: {0}")]
    Api(ApiError),

    /// A 2xx response body did not match the expected schema
    #[error("Schema validation failed for {context}: {source}")]
    SchemaValidation {
        /// What was being decoded, e.g. `GET /accounts`
        context: String,
        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The request never produced a response (connection, TLS, timeout)
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but its body could not be read
    #[error("Failed to read response body for {context} (HTTP {status}): {source}")]
    ResponseBody {
        /// The request, e.g. `GET /accounts`
        context: String,
        /// HTTP status of the response
        status: u16,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Item list file is not valid YAML
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A full-pagination listing reached the configured page cap
    #[error("Pagination stopped after {max_pages} pages; server reported more")]
    PageLimitExceeded {
        /// The configured cap
        max_pages: u32,
    },
}

impl Error {
    /// Classify a non-2xx response into its error kind.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let details = ApiError::from_response(status, body);
        match status.as_u16() {
            400 => Error::BadRequest(details),
            401 => Error::Unauthorized(details),
            404 => Error::NotFound(details),
            409 => Error::Conflict(details),
            s if s >= 500 => Error::InternalServer(details),
            _ => Error::Api(details),
        }
    }

    pub(crate) fn schema(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::SchemaValidation {
            context: context.into(),
            source,
        }
    }

    /// The API-reported details, if this error came from a non-2xx response.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::BadRequest(e)
            | Error::Unauthorized(e)
            | Error::NotFound(e)
            | Error::Conflict(e)
            | Error::InternalServer(e)
            | Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// The HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            Error::ResponseBody { status, .. } => Some(*status),
            other => other.api_error().map(|e| e.status),
        }
    }

    /// Returns `true` if the server rejected the credentials or API key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (4xx response or invalid local input).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) | Error::Yaml(_) => true,
            other => other
                .api_error()
                .map(|e| (400..500).contains(&e.status))
                .unwrap_or(false),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::InternalServer(_))
    }
}
