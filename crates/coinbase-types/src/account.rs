//! Wallet accounts and balances

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::envelope::Page;

/// Amount of a given currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Sent as a decimal string, e.g. `"39.59000000"`
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    /// Whether the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Currency metadata attached to an account
///
/// Older API versions send only the currency code as a plain string; both
/// forms decode into this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CurrencyRepr")]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub color: Option<String>,
    pub sort_index: Option<i64>,
    pub exponent: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub address_regex: Option<String>,
    pub asset_id: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyRepr {
    Code(String),
    Full {
        code: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        sort_index: Option<i64>,
        #[serde(default)]
        exponent: Option<u32>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        address_regex: Option<String>,
        #[serde(default)]
        asset_id: Option<String>,
        #[serde(default)]
        slug: Option<String>,
    },
}

impl From<CurrencyRepr> for Currency {
    fn from(repr: CurrencyRepr) -> Self {
        match repr {
            CurrencyRepr::Code(code) => Self {
                code,
                ..Self::default()
            },
            CurrencyRepr::Full {
                code,
                name,
                color,
                sort_index,
                exponent,
                kind,
                address_regex,
                asset_id,
                slug,
            } => Self {
                code,
                name,
                color,
                sort_index,
                exponent,
                kind,
                address_regex,
                asset_id,
                slug,
            },
        }
    }
}

/// A wallet, vault or fiat account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary: bool,
    /// `wallet`, `vault` or `fiat`
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: Currency,
    pub balance: Money,
    #[serde(default)]
    pub native_balance: Option<Money>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default, alias = "allow_deposit")]
    pub allow_deposits: bool,
    #[serde(default)]
    pub allow_withdrawals: bool,
}

impl Account {
    /// Whether the account holds a strictly positive balance
    pub fn is_funded(&self) -> bool {
        self.balance.is_positive()
    }
}

/// Paginated list of accounts
pub type Accounts = Page<Account>;

impl Page<Account> {
    /// Find the account whose balance is denominated in `currency`
    pub fn find_by_currency(&self, currency: &str) -> Option<&Account> {
        self.data
            .iter()
            .find(|account| account.balance.currency == currency)
    }

    /// Drop accounts with a zero or negative balance
    pub fn retain_funded(&mut self) {
        self.data.retain(Account::is_funded);
    }
}
