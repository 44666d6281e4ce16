//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the documented Coinbase v2 payloads.

#![allow(dead_code)]

use coinbase_rest::{ClientConfig, CoinbaseClient, Credentials};
use hmac::{Hmac, Mac};
use httpmock::prelude::HttpMockRequest;
use httpmock::MockServer;
use sha2::Sha256;

pub const API_KEY: &str = "k1";
pub const API_SECRET: &str = "s3cr3t";

/// Spot price for BTC-USD
pub const SPOT_PRICE: &str = r#"{
    "data": {
        "amount": "1020.25",
        "currency": "USD",
        "base": "BTC"
    }
}"#;

/// Single account
pub const ACCOUNT: &str = r##"{
    "data": {
        "id": "2bbf394c-193b-5b2a-9155-3b4732659ede",
        "name": "My Wallet",
        "primary": true,
        "type": "wallet",
        "currency": {
            "code": "BTC",
            "name": "Bitcoin",
            "color": "#F7931A",
            "sort_index": 100,
            "exponent": 8,
            "type": "crypto",
            "address_regex": "^([13][a-km-zA-HJ-NP-Z1-9]{25,34})$",
            "asset_id": "5b71fc48-3dd3-540c-809b-f8c94d0e68b5",
            "slug": "bitcoin"
        },
        "balance": {"amount": "39.59000000", "currency": "BTC"},
        "created_at": "2015-01-31T20:49:02Z",
        "updated_at": "2015-01-31T20:49:02Z",
        "resource": "account",
        "resource_path": "/v2/accounts/2bbf394c-193b-5b2a-9155-3b4732659ede",
        "allow_deposits": true,
        "allow_withdrawals": true
    }
}"##;

/// Two accounts, one of them empty
pub const ACCOUNTS: &str = r#"{
    "pagination": {
        "ending_before": null,
        "starting_after": null,
        "previous_ending_before": null,
        "next_starting_after": "58542935-67b5-56e1-a3f9-42686e07fa40",
        "limit": 2,
        "order": "desc",
        "previous_uri": null,
        "next_uri": "/v2/accounts?starting_after=58542935-67b5-56e1-a3f9-42686e07fa40"
    },
    "data": [
        {
            "id": "58542935-67b5-56e1-a3f9-42686e07fa40",
            "name": "My Vault",
            "primary": false,
            "type": "vault",
            "currency": {"code": "BTC", "name": "Bitcoin"},
            "balance": {"amount": "4.00000000", "currency": "BTC"},
            "created_at": "2015-01-31T20:49:02Z",
            "updated_at": "2015-01-31T20:49:02Z",
            "resource": "account",
            "resource_path": "/v2/accounts/58542935-67b5-56e1-a3f9-42686e07fa40",
            "allow_deposits": true,
            "allow_withdrawals": true
        },
        {
            "id": "c0e9e2d4-2d5a-5b0e-9a6e-1f3c8a6b1a11",
            "name": "ETH Wallet",
            "primary": false,
            "type": "wallet",
            "currency": {"code": "ETH", "name": "Ethereum"},
            "balance": {"amount": "0.00000000", "currency": "ETH"},
            "resource": "account",
            "resource_path": "/v2/accounts/c0e9e2d4-2d5a-5b0e-9a6e-1f3c8a6b1a11",
            "allow_deposits": true,
            "allow_withdrawals": true
        }
    ]
}"#;

/// Transaction history with one send
pub const TRANSACTIONS: &str = r#"{
    "pagination": {
        "ending_before": null,
        "starting_after": null,
        "limit": 25,
        "order": "desc",
        "previous_uri": null,
        "next_uri": null
    },
    "data": [
        {
            "id": "57ffb4ae-0c59-5430-bcd3-3f98f797a66c",
            "type": "send",
            "status": "completed",
            "amount": {"amount": "-0.00100000", "currency": "BTC"},
            "native_amount": {"amount": "-0.01", "currency": "USD"},
            "description": null,
            "created_at": "2015-03-11T13:13:35-07:00",
            "updated_at": "2015-03-26T15:55:43-07:00",
            "resource": "transaction",
            "resource_path": "/v2/accounts/2bbf394c-193b-5b2a-9155-3b4732659ede/transactions/57ffb4ae-0c59-5430-bcd3-3f98f797a66c",
            "network": {"status": "off_blockchain", "name": "bitcoin"},
            "to": {
                "id": "a6b4c2df-a62c-5d68-822a-dd4e2102e703",
                "resource": "user",
                "resource_path": "/v2/users/a6b4c2df-a62c-5d68-822a-dd4e2102e703"
            },
            "details": {"title": "Send bitcoin", "subtitle": "to User 2"}
        }
    ]
}"#;

/// Newly created deposit address
pub const ADDRESS: &str = r#"{
    "data": {
        "id": "dd3183eb-af1d-5f5d-a90d-cbff946435ff",
        "address": "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa",
        "name": null,
        "created_at": "2015-01-31T20:49:02Z",
        "updated_at": "2015-03-31T17:25:29-07:00",
        "network": "bitcoin",
        "resource": "address",
        "resource_path": "/v2/accounts/2bbf394c-193b-5b2a-9155-3b4732659ede/addresses/dd3183eb-af1d-5f5d-a90d-cbff946435ff"
    }
}"#;

/// Error envelope for a rejected signature
pub const AUTH_ERROR: &str = r#"{
    "errors": [
        {"id": "authentication_error", "message": "invalid signature"}
    ]
}"#;

/// Error envelope for an unknown account
pub const NOT_FOUND_ERROR: &str = r#"{
    "errors": [
        {"id": "not_found", "message": "Not found"}
    ]
}"#;

/// Route client logs to the test harness when `RUST_LOG` is set
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Recompute the HMAC over what the server actually received and compare it
/// with the `CB-ACCESS-SIGN` header
pub fn signature_is_valid(req: &HttpMockRequest) -> bool {
    let headers = req.headers();
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let (Some(key), Some(timestamp), Some(signature)) = (
        header("cb-access-key"),
        header("cb-access-timestamp"),
        header("cb-access-sign"),
    ) else {
        return false;
    };

    let uri = req.uri();
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    let mut mac = Hmac::<Sha256>::new_from_slice(API_SECRET.as_bytes()).unwrap();
    mac.update(timestamp.as_bytes());
    mac.update(req.method_str().as_bytes());
    mac.update(path.as_bytes());
    mac.update(req.body_ref());

    key == API_KEY && hex::encode(mac.finalize().into_bytes()) == signature
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> CoinbaseClient {
    init_tracing();
    let config = ClientConfig::new()
        .with_base_url(server.base_url())
        .with_timeout(5);
    CoinbaseClient::with_config(Credentials::new(API_KEY, API_SECRET), config)
        .expect("client should build")
}
