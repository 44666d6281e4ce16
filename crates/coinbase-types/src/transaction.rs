//! Account transactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::Money;
use crate::envelope::Page;

/// Reference to a related resource (a buy, a recipient, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: Option<String>,
    /// Set for external recipients
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// On-chain network status of a send
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Display strings for a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

/// One entry of an account's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// `send`, `buy`, `sell`, `fiat_deposit`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub amount: Money,
    pub native_amount: Money,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub buy: Option<Resource>,
    #[serde(default)]
    pub sell: Option<Resource>,
    #[serde(default)]
    pub to: Option<Resource>,
    #[serde(default)]
    pub from: Option<Resource>,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub details: TransactionDetails,
}

impl Transaction {
    /// Whether the transaction has settled
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// Paginated list of transactions
pub type Transactions = Page<Transaction>;
