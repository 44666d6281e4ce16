//! Deposit addresses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::Page;

/// A receive address belonging to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
}

/// Paginated list of addresses
pub type Addresses = Page<Address>;

/// Body for creating a new address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAddress {
    /// Optional label for the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateAddress {
    /// Label the new address
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let json = r#"{
            "id": "dd3183eb-af1d-5f5d-a90d-cbff946435ff",
            "address": "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa",
            "name": "One off payment",
            "created_at": "2015-01-31T20:49:02Z",
            "updated_at": "2015-03-31T17:25:29-07:00",
            "network": "bitcoin",
            "resource": "address",
            "resource_path": "/v2/accounts/2bbf394c/addresses/dd3183eb"
        }"#;
        let address: Address = serde_json::from_str(json).unwrap();

        assert_eq!(address.address, "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa");
        assert_eq!(address.network.as_deref(), Some("bitcoin"));
    }

    #[test]
    fn test_create_address_body() {
        assert_eq!(serde_json::to_string(&CreateAddress::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&CreateAddress::named("cold")).unwrap(),
            r#"{"name":"cold"}"#
        );
    }
}
