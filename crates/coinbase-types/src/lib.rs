//! Shared types for the Coinbase v2 REST API
//!
//! Plain records decoded from the exchange's JSON responses. The crate has no
//! networking and can be used on its own to parse captured payloads.
//!
//! # Key Types
//!
//! - [`Data`], [`Page`] - Success envelopes for single-object and list responses
//! - [`Pagination`] - Cursor metadata embedded in list responses
//! - [`Account`], [`Accounts`], [`Money`], [`Currency`] - Wallet accounts
//! - [`Transaction`], [`Transactions`] - Account history
//! - [`Address`] - Deposit addresses
//! - [`SpotPrice`] - Price quotes for a currency pair
//! - [`ErrorEnvelope`], [`ApiErrorCode`] - Failure payloads and their error ids

pub mod account;
pub mod address;
pub mod envelope;
pub mod error_codes;
pub mod pagination;
pub mod price;
pub mod transaction;

pub use account::*;
pub use address::*;
pub use envelope::*;
pub use error_codes::*;
pub use pagination::*;
pub use price::*;
pub use transaction::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
