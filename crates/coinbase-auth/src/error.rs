//! Error types for credential and signing operations

/// Errors that can occur while loading credentials or signing a request
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The secret could not be used as key material for the MAC
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// System clock is unusable for request timestamps
    #[error("Clock error: {0}")]
    Clock(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
