//! REST API client for the Coinbase v2 API
//!
//! This crate turns a logical API call (method, path, parameters) into a
//! signed HTTP request and decodes the JSON response into a caller-chosen
//! type.
//!
//! # Features
//!
//! - **Dispatch**: [`CoinbaseClient::request`] plus `get`/`post`/`put`/`delete`
//! - **Prices**: Spot, buy and sell quotes
//! - **Accounts**: Accounts, deposit addresses, transaction history
//! - **Deadlines**: Per-call timeout and cancellation via [`RequestOptions`]
//!
//! # Authentication
//!
//! Every request carries `CB-ACCESS-KEY`, `CB-ACCESS-TIMESTAMP` and an
//! HMAC-SHA256 `CB-ACCESS-SIGN` computed over
//! `timestamp + METHOD + path + body`.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{CoinbaseClient, Credentials, Data, NO_PARAMS};
//! use coinbase_rest::types::Account;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseClient::new(Credentials::new("api-key", "api-secret"))?;
//!
//!     // Typed endpoint
//!     let mut accounts = client.list_accounts().await?;
//!     accounts.retain_funded();
//!
//!     // Raw dispatch into any deserializable shape
//!     let primary: Data<Account> = client.get("v2/accounts/primary", NO_PARAMS).await?;
//!     println!("Primary: {}", primary.data.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is returned to the caller; nothing is retried. Use
//! [`RestError::kind`] to tell signing, transport, API and decode failures
//! apart.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;

// Re-export main types
pub use client::{ClientConfig, CoinbaseClient, DEFAULT_BASE_URL};
pub use coinbase_auth::{AuthError, Credentials, Method};
pub use error::{ErrorKind, RestError, RestResult};
pub use request::{RequestOptions, NO_PARAMS};

// Re-export endpoint-specific types
pub use endpoints::{AccountEndpoints, ListParams, Order, PriceEndpoints};

// Response records
pub use coinbase_types as types;
pub use coinbase_types::{Data, Page, Pagination};
