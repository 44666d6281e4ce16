//! Request signing
//!
//! Coinbase signature algorithm:
//! 1. message = timestamp + METHOD + request_path + body
//! 2. HMAC-SHA256(api_secret, message)
//! 3. Hex encode result
//!
//! `request_path` is the path and query exactly as sent on the wire,
//! including the leading `/`.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Header carrying the public API key
pub const ACCESS_KEY_HEADER: &str = "CB-ACCESS-KEY";

/// Header carrying the hex-encoded HMAC signature
pub const SIGNATURE_HEADER: &str = "CB-ACCESS-SIGN";

/// Header carrying the timestamp used in the signature
pub const TIMESTAMP_HEADER: &str = "CB-ACCESS-TIMESTAMP";

/// HTTP verbs accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case verb as it appears in the signed message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than a JSON body
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current unix time in seconds
pub fn unix_timestamp() -> AuthResult<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| AuthError::Clock(e.to_string()))
}

/// The parts of one HTTP request covered by the signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableRequest {
    pub method: Method,
    /// Path and query, e.g. `/v2/accounts?limit=25`
    pub path: String,
    /// Unix seconds
    pub timestamp: u64,
    /// Raw body, empty when the request has none
    pub body: Vec<u8>,
}

impl SignableRequest {
    /// Create a request with an empty body
    pub fn new(method: Method, path: impl Into<String>, timestamp: u64) -> Self {
        Self {
            method,
            path: path.into(),
            timestamp,
            body: Vec::new(),
        }
    }

    /// Create a request stamped with the current time
    pub fn now(method: Method, path: impl Into<String>) -> AuthResult<Self> {
        Ok(Self::new(method, path, unix_timestamp()?))
    }

    /// Attach a body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Canonical message: `timestamp || METHOD || path || body`
    pub fn message(&self) -> Vec<u8> {
        let timestamp = self.timestamp.to_string();
        let method = self.method.as_str();

        let mut message =
            Vec::with_capacity(timestamp.len() + method.len() + self.path.len() + self.body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(method.as_bytes());
        message.extend_from_slice(self.path.as_bytes());
        message.extend_from_slice(&self.body);
        message
    }
}

/// Authentication headers for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Hex-encoded HMAC-SHA256
    pub signature: String,
    /// Same timestamp that was signed
    pub timestamp: String,
    /// Public API key
    pub access_key: String,
}

impl SignedHeaders {
    /// `(header name, value)` pairs ready to attach to an HTTP request
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ACCESS_KEY_HEADER, self.access_key.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
            (TIMESTAMP_HEADER, self.timestamp.as_str()),
        ]
        .into_iter()
    }
}

/// Signs requests with a borrowed set of credentials
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request
    ///
    /// Pure function of the request and the credentials: the same inputs
    /// always yield the same headers.
    pub fn sign(&self, request: &SignableRequest) -> AuthResult<SignedHeaders> {
        let signature = self.credentials.hmac_hex(&request.message())?;

        trace!(method = %request.method, path = %request.path, "Signed request");

        Ok(SignedHeaders {
            signature,
            timestamp: request.timestamp.to_string(),
            access_key: self.credentials.api_key().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TS: u64 = 1_700_000_000;

    fn creds() -> Credentials {
        Credentials::new("k1", "s3cr3t")
    }

    fn sign(creds: &Credentials, request: &SignableRequest) -> String {
        RequestSigner::new(creds).sign(request).unwrap().signature
    }

    fn random_string(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        rng.sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
        assert!(Method::Get.uses_query());
        assert!(Method::Delete.uses_query());
        assert!(!Method::Post.uses_query());
    }

    #[test]
    fn test_message_layout() {
        let request = SignableRequest::new(Method::Post, "/v2/accounts/123/addresses", TS)
            .with_body("{}");
        assert_eq!(
            request.message(),
            b"1700000000POST/v2/accounts/123/addresses{}".to_vec()
        );
    }

    #[test]
    fn test_fixed_vector_get_accounts() {
        let request = SignableRequest::new(Method::Get, "/v2/accounts", TS);
        let headers = RequestSigner::new(&creds()).sign(&request).unwrap();

        assert_eq!(
            headers.signature,
            "e8f01aa8d8c45dd832909ca72d69e12bdb31aaf1fd5be7e66c79ee1fbbb6822f"
        );
        assert_eq!(headers.timestamp, "1700000000");
        assert_eq!(headers.access_key, "k1");
    }

    #[test]
    fn test_fixed_vector_post_address() {
        let request = SignableRequest::new(Method::Post, "/v2/accounts/123/addresses", TS)
            .with_body("{}");

        assert_eq!(
            sign(&creds(), &request),
            "6fdf828692ca72f95b5bd17cb8bfd76719e884a1bf49ac777e6688692aab78c3"
        );
    }

    #[test]
    fn test_signing_is_deterministic_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let methods = [Method::Get, Method::Post, Method::Put, Method::Delete];

        for _ in 0..256 {
            let creds = Credentials::new(random_string(&mut rng, 16), random_string(&mut rng, 64));
            let path = format!("/{}", random_string(&mut rng, 40));
            let request = SignableRequest::new(methods[rng.gen_range(0..4)], path, rng.gen())
                .with_body(random_string(&mut rng, 80));

            let first = RequestSigner::new(&creds).sign(&request).unwrap();
            let second = RequestSigner::new(&creds.clone()).sign(&request.clone()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_each_field_changes_signature() {
        let creds = creds();
        let base = SignableRequest::new(Method::Post, "/v2/ab", TS).with_body("c");
        let reference = sign(&creds, &base);

        let mut changed = base.clone();
        changed.method = Method::Put;
        assert_ne!(sign(&creds, &changed), reference);

        let mut changed = base.clone();
        changed.path = "/v2/a".to_string();
        assert_ne!(sign(&creds, &changed), reference);

        let mut changed = base.clone();
        changed.body = b"bc".to_vec();
        assert_ne!(sign(&creds, &changed), reference);

        let mut changed = base.clone();
        changed.timestamp = TS + 1;
        assert_ne!(sign(&creds, &changed), reference);

        assert_ne!(sign(&Credentials::new("k1", "other"), &base), reference);
    }

    #[test]
    fn test_public_key_not_part_of_signature() {
        let request = SignableRequest::new(Method::Get, "/v2/accounts", TS);
        let a = RequestSigner::new(&Credentials::new("k1", "s3cr3t"))
            .sign(&request)
            .unwrap();
        let b = RequestSigner::new(&Credentials::new("k2", "s3cr3t"))
            .sign(&request)
            .unwrap();

        assert_eq!(a.signature, b.signature);
        assert_ne!(a.access_key, b.access_key);
    }

    #[test]
    fn test_headers_iter_names() {
        let request = SignableRequest::new(Method::Get, "/v2/accounts", TS);
        let headers = RequestSigner::new(&creds()).sign(&request).unwrap();
        let pairs: Vec<_> = headers.iter().collect();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("CB-ACCESS-KEY", "k1"));
        assert_eq!(pairs[1].0, "CB-ACCESS-SIGN");
        assert_eq!(pairs[2], ("CB-ACCESS-TIMESTAMP", "1700000000"));
    }

    #[test]
    fn test_now_uses_current_time() {
        let before = unix_timestamp().unwrap();
        let request = SignableRequest::now(Method::Get, "/v2/accounts").unwrap();
        let after = unix_timestamp().unwrap();
        assert!(request.timestamp >= before && request.timestamp <= after);
        assert!(request.body.is_empty());
    }
}
