//! Coinbase API error id mapping
//!
//! Failed calls carry a machine-readable `id` in each entry of the `errors`
//! array. This module maps the documented ids onto an enum so callers can
//! branch on the cause without string matching.

use std::fmt;

/// All documented Coinbase v2 error ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    // === 400 ===
    /// two_factor_required
    TwoFactorRequired,
    /// param_required
    ParamRequired,
    /// validation_error
    ValidationError,
    /// invalid_request
    InvalidRequest,
    /// personal_details_required
    PersonalDetailsRequired,
    /// identity_verification_required
    IdentityVerificationRequired,
    /// jumio_verification_required
    JumioVerificationRequired,
    /// jumio_face_match_verification_required
    JumioFaceMatchVerificationRequired,
    /// unverified_email
    UnverifiedEmail,

    // === 401 ===
    /// authentication_error
    AuthenticationError,
    /// invalid_token
    InvalidToken,
    /// revoked_token
    RevokedToken,
    /// expired_token
    ExpiredToken,

    // === 403 ===
    /// invalid_scope
    InvalidScope,

    // === 404 ===
    /// not_found
    NotFound,

    // === 429 ===
    /// rate_limit_exceeded
    RateLimitExceeded,

    // === 500 ===
    /// internal_server_error
    InternalServerError,
}

impl ApiErrorCode {
    /// Map an error id from the `errors` array
    ///
    /// Matching ignores ASCII case since newer endpoints send upper-case ids.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id.to_ascii_lowercase();

        Some(match normalized.as_str() {
            "two_factor_required" => Self::TwoFactorRequired,
            "param_required" => Self::ParamRequired,
            "validation_error" => Self::ValidationError,
            "invalid_request" => Self::InvalidRequest,
            "personal_details_required" => Self::PersonalDetailsRequired,
            "identity_verification_required" => Self::IdentityVerificationRequired,
            "jumio_verification_required" => Self::JumioVerificationRequired,
            "jumio_face_match_verification_required" => Self::JumioFaceMatchVerificationRequired,
            "unverified_email" => Self::UnverifiedEmail,
            "authentication_error" | "unauthorized" => Self::AuthenticationError,
            "invalid_token" => Self::InvalidToken,
            "revoked_token" => Self::RevokedToken,
            "expired_token" => Self::ExpiredToken,
            "invalid_scope" | "permission_denied" => Self::InvalidScope,
            "not_found" => Self::NotFound,
            "rate_limit_exceeded" => Self::RateLimitExceeded,
            "internal_server_error" => Self::InternalServerError,
            _ => return None,
        })
    }

    /// The documented id string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoFactorRequired => "two_factor_required",
            Self::ParamRequired => "param_required",
            Self::ValidationError => "validation_error",
            Self::InvalidRequest => "invalid_request",
            Self::PersonalDetailsRequired => "personal_details_required",
            Self::IdentityVerificationRequired => "identity_verification_required",
            Self::JumioVerificationRequired => "jumio_verification_required",
            Self::JumioFaceMatchVerificationRequired => "jumio_face_match_verification_required",
            Self::UnverifiedEmail => "unverified_email",
            Self::AuthenticationError => "authentication_error",
            Self::InvalidToken => "invalid_token",
            Self::RevokedToken => "revoked_token",
            Self::ExpiredToken => "expired_token",
            Self::InvalidScope => "invalid_scope",
            Self::NotFound => "not_found",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::InternalServerError => "internal_server_error",
        }
    }

    /// HTTP status the API documents for this id
    pub fn http_status(&self) -> u16 {
        match self {
            Self::TwoFactorRequired
            | Self::ParamRequired
            | Self::ValidationError
            | Self::InvalidRequest
            | Self::PersonalDetailsRequired
            | Self::IdentityVerificationRequired
            | Self::JumioVerificationRequired
            | Self::JumioFaceMatchVerificationRequired
            | Self::UnverifiedEmail => 400,
            Self::AuthenticationError
            | Self::InvalidToken
            | Self::RevokedToken
            | Self::ExpiredToken => 401,
            Self::InvalidScope => 403,
            Self::NotFound => 404,
            Self::RateLimitExceeded => 429,
            Self::InternalServerError => 500,
        }
    }

    /// Whether the request was rejected because of the credentials or signature
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationError
                | Self::InvalidToken
                | Self::RevokedToken
                | Self::ExpiredToken
                | Self::InvalidScope
        )
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }

    /// Whether the account owner has to act on the exchange before retrying
    pub fn requires_user_action(&self) -> bool {
        matches!(
            self,
            Self::TwoFactorRequired
                | Self::PersonalDetailsRequired
                | Self::IdentityVerificationRequired
                | Self::JumioVerificationRequired
                | Self::JumioFaceMatchVerificationRequired
                | Self::UnverifiedEmail
        )
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
