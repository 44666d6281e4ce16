//! Price endpoints

use coinbase_types::{Data, PriceKind, SpotPrice};
use tracing::instrument;

use crate::client::CoinbaseClient;
use crate::endpoints::path_segment;
use crate::error::RestResult;
use crate::request::NO_PARAMS;

/// Price quote endpoints
pub struct PriceEndpoints<'a> {
    client: &'a CoinbaseClient,
}

impl<'a> PriceEndpoints<'a> {
    pub fn new(client: &'a CoinbaseClient) -> Self {
        Self { client }
    }

    /// Get a price quote of `kind` for `base`-`quote`
    ///
    /// # Arguments
    /// * `base` - Base currency (e.g., "BTC")
    /// * `quote` - Quote currency (e.g., "USD")
    #[instrument(skip(self))]
    pub async fn quote(&self, kind: PriceKind, base: &str, quote: &str) -> RestResult<SpotPrice> {
        let path = format!(
            "v2/prices/{}-{}/{}",
            path_segment("base currency", base)?,
            path_segment("quote currency", quote)?,
            kind.as_str()
        );

        let response: Data<SpotPrice> = self.client.get(&path, NO_PARAMS).await?;
        Ok(response.into_inner())
    }

    /// Get the current spot price
    pub async fn spot(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.quote(PriceKind::Spot, base, quote).await
    }

    /// Get the total price to buy one unit, fees included
    pub async fn buy(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.quote(PriceKind::Buy, base, quote).await
    }

    /// Get the total price to sell one unit, fees included
    pub async fn sell(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.quote(PriceKind::Sell, base, quote).await
    }
}
