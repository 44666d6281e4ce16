//! Price quotes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of one unit of `base` expressed in `currency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotPrice {
    pub amount: Decimal,
    /// Quote currency
    pub currency: String,
    /// Base currency, absent on older API versions
    #[serde(default)]
    pub base: Option<String>,
}

/// Which side of the book a price endpoint quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    Spot,
    Buy,
    Sell,
}

impl PriceKind {
    /// Trailing path segment of the endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}
