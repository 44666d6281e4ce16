//! Error types for REST API operations

use coinbase_auth::AuthError;
use coinbase_types::{ApiErrorCode, ApiErrorEntry, ErrorEnvelope};
use reqwest::StatusCode;

/// Coarse classification of a [`RestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key material could not be used to sign
    Crypto,
    /// No usable response: network failure, timeout, cancellation or an
    /// unrecognized failure body
    Transport,
    /// The exchange rejected the call with an error envelope
    Api,
    /// A success response did not match the expected shape
    Decode,
    /// The call was malformed before anything was sent
    Usage,
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Credential or signing failure
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Request was cancelled by the caller
    #[error("Request cancelled")]
    Cancelled,

    /// Non-success status whose body is not an error envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// API returned an error
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        /// Parsed error id (if recognized)
        code: Option<ApiErrorCode>,
        /// Error id of the first entry, verbatim
        id: String,
        /// Message of the first entry, verbatim
        message: String,
        /// Every entry the API returned
        errors: Vec<ApiErrorEntry>,
    },

    /// Failed to decode a success response
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RestError {
    /// Classify a transport failure, folding reqwest timeouts into [`RestError::Timeout`]
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }

    /// Build the error for a non-success response
    ///
    /// Uses the first entry of the error envelope when the body has one and
    /// falls back to the raw status and body otherwise.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let Some(envelope) = ErrorEnvelope::parse(body) else {
            return Self::Status {
                status,
                body: body.to_string(),
            };
        };

        let errors = envelope.entries();
        let (id, message) = errors
            .first()
            .map(|entry| (entry.id.clone(), entry.message.clone()))
            .unwrap_or_default();

        Self::Api {
            status,
            code: ApiErrorCode::from_id(&id),
            id,
            message,
            errors,
        }
    }

    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(AuthError::Crypto(_)) => ErrorKind::Crypto,
            Self::Auth(_) | Self::InvalidParameter(_) | Self::Configuration(_) => ErrorKind::Usage,
            Self::Http(_) | Self::Timeout | Self::Cancelled | Self::Status { .. } => {
                ErrorKind::Transport
            }
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Get the error code if this is an API error
    pub fn error_code(&self) -> Option<ApiErrorCode> {
        match self {
            Self::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Check if the deadline elapsed before a response arrived
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the exchange rejected the key or signature
    pub fn is_authentication(&self) -> bool {
        match self {
            Self::Api { code: Some(code), .. } => code.is_authentication(),
            _ => self.status() == Some(StatusCode::UNAUTHORIZED),
        }
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.error_code().is_some_and(|c| c.is_rate_limit())
            || self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
