use serde_json::Value;
use thiserror::Error;

/// Main error type for Tumblr API operations
#[derive(Debug, Error)]
pub enum RestError {
    /// Caller supplied an option outside the operation's whitelist
    #[error("Invalid options ({}) passed, only [{}] allowed.", .rejected.join(", "), .allowed.join(", "))]
    UnknownOption {
        rejected: Vec<String>,
        allowed: Vec<String>,
    },

    /// Caller supplied more than one member of a mutually exclusive group
    #[error("Can only use one of: {} (Found {found})", .group.join(", "))]
    ConflictingOption { group: Vec<String>, found: usize },

    /// Unknown post type passed to `create_post`
    #[error("\"{0}\" is not a valid post type")]
    InvalidPostType(String),

    /// Error envelope returned by the API
    #[error("Tumblr API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<Value>,
    },

    /// HTTP transport error with a body that is not an API envelope
    #[error("HTTP error {status}: {body}")]
    Http {
        status: u16,
        body: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Redirect expected but the response carried no usable Location header
    #[error("missing redirect location for {0}")]
    MissingRedirect(String),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RestError {
    /// Create a new HTTP error
    pub fn http(status: u16, body: String, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RestError::Http { status, body, source }
    }

    /// Check if this error was raised by option validation, before any I/O
    pub fn is_invalid_option(&self) -> bool {
        matches!(
            self,
            RestError::UnknownOption { .. } | RestError::ConflictingOption { .. }
        )
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Get the HTTP status code if the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestError::Api { status, .. } | RestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Tumblr operations
pub type Result<T> = std::result::Result<T, RestError>;
