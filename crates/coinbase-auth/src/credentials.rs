//! API key credentials for Coinbase
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the public API key
pub const API_KEY_ENV: &str = "COINBASE_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "COINBASE_API_SECRET";

/// API key pair for authenticated requests
///
/// Immutable once constructed. The secret is zeroized when the credentials
/// are dropped and never appears in `Debug` output.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret used as the HMAC key (zeroized on drop)
    api_secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and its secret
    ///
    /// No format validation happens here. A wrong secret produces a
    /// well-formed signature that the exchange rejects.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretBox::new(Box::new(api_secret.as_ref().as_bytes().to_vec())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// HMAC-SHA256 of `message` keyed by the secret, lower-case hex encoded
    pub(crate) fn hmac_hex(&self, message: &[u8]) -> AuthResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret())
            .map_err(|e| AuthError::Crypto(e.to_string()))?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key_123", "super_secret_value");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(!debug.contains("test_api_key_123"));
        assert!(debug.contains("test_api..."));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_handles_multibyte_key() {
        let creds = Credentials::new("ключключключ", "s");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ключключ..."));
    }

    #[test]
    fn test_clone_keeps_key_material() {
        let creds = Credentials::new("k1", "s3cr3t");
        let cloned = creds.clone();
        assert_eq!(cloned.api_key(), "k1");
        assert_eq!(
            creds.hmac_hex(b"message").unwrap(),
            cloned.hmac_hex(b"message").unwrap()
        );
    }

    #[test]
    fn test_empty_secret_still_signs() {
        // HMAC accepts any key length, so an empty secret is a wrong key rather than an error
        let creds = Credentials::new("k1", "");
        let digest = creds.hmac_hex(b"1700000000GET/v2/accounts").unwrap();
        assert_eq!(
            digest,
            "10d1f8dad40c05419cabb8471db957ad3998e3a34c7e8f7ec4fdd8f2cfe36ec1"
        );
    }
}
