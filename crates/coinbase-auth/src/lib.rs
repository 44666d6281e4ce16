//! API key credentials and request signing for the Coinbase v2 REST API
//!
//! Every private call to the exchange carries three headers derived from the
//! caller's API key pair: the public key, a request timestamp and an
//! HMAC-SHA256 signature over `timestamp + METHOD + path + body`.
//!
//! # Example
//!
//! ```
//! use coinbase_auth::{Credentials, Method, RequestSigner, SignableRequest};
//!
//! let creds = Credentials::new("k1", "s3cr3t");
//! let request = SignableRequest::new(Method::Get, "/v2/accounts", 1_700_000_000);
//!
//! let headers = RequestSigner::new(&creds).sign(&request).unwrap();
//! assert_eq!(headers.access_key, "k1");
//! assert_eq!(headers.timestamp, "1700000000");
//! assert_eq!(headers.signature.len(), 64);
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{
    unix_timestamp, Method, RequestSigner, SignableRequest, SignedHeaders, ACCESS_KEY_HEADER,
    SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
