//! Main REST client implementation

use std::sync::Arc;
use std::time::Duration;

use coinbase_auth::{unix_timestamp, Credentials, Method, RequestSigner};
use coinbase_types::{
    Account, Accounts, Address, Addresses, CreateAddress, SpotPrice, Transaction, Transactions,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::endpoints::{AccountEndpoints, ListParams, PriceEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{PreparedRequest, RequestOptions};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com/";

/// Header pinning the API version
pub const VERSION_HEADER: &str = "CB-VERSION";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("coinbase-rest/", env!("CARGO_PKG_VERSION"));

/// Coinbase REST API client
///
/// Signs every request with the API key pair it was built from. Cloning is
/// cheap and clones share the same read-only credentials, so one client can
/// serve any number of concurrent calls.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::{CoinbaseClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinbaseClient::new(Credentials::from_env()?)?;
///
///     let price = client.get_spot_price("BTC", "USD").await?;
///     println!("BTC-USD: {}", price.amount);
///
///     let accounts = client.list_accounts().await?;
///     for account in accounts.iter() {
///         println!("{}: {}", account.name, account.balance.amount);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseClient {
    http_client: Client,
    credentials: Arc<Credentials>,
    base_url: Url,
    api_version: Option<String>,
}

impl CoinbaseClient {
    /// Create a client for the production API
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from environment variables
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET` from the environment.
    pub fn from_env() -> RestResult<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            // Signed headers must never be replayed to a redirect target
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                RestError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        info!(base_url = %base_url, "Created Coinbase REST client");

        Ok(Self {
            http_client,
            credentials: Arc::new(credentials),
            base_url,
            api_version: config.api_version,
        })
    }

    /// Credentials used to sign requests
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// API root every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Execute one signed API call and decode the response into `T`
    ///
    /// `T` is the full response body, e.g. `Data<Account>` or `Accounts`.
    pub async fn request<P, T>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_with(method, path, params, &RequestOptions::default())
            .await
    }

    /// Like [`request`](Self::request), bounded by a deadline and/or cancellation token
    pub async fn request_with<P, T>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
        options: &RequestOptions,
    ) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let prepared = PreparedRequest::prepare(&self.base_url, method, path, params)?;
        let signable = prepared.signable(unix_timestamp()?);
        let signed = RequestSigner::new(&self.credentials).sign(&signable)?;

        let mut builder = self
            .http_client
            .request(prepared.http_method(), prepared.url.clone())
            .header(ACCEPT, "application/json");
        for (name, value) in signed.iter() {
            builder = builder.header(name, value);
        }
        if let Some(version) = &self.api_version {
            builder = builder.header(VERSION_HEADER, version);
        }
        if !method.uses_query() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(prepared.body.clone());
        }

        debug!(%method, path = %prepared.request_path(), "Sending request");

        let exchange = async move {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let (status, body) = options.run(exchange).await?;

        debug!(
            %method,
            path = %prepared.request_path(),
            status = status.as_u16(),
            "Received response"
        );

        decode_response(status, &body)
    }

    /// Send a GET request
    pub async fn get<P, T>(&self, path: &str, params: Option<&P>) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Get, path, params).await
    }

    /// Send a POST request
    pub async fn post<P, T>(&self, path: &str, params: Option<&P>) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Post, path, params).await
    }

    /// Send a PUT request
    pub async fn put<P, T>(&self, path: &str, params: Option<&P>) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Put, path, params).await
    }

    /// Send a DELETE request
    pub async fn delete<P, T>(&self, path: &str, params: Option<&P>) -> RestResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Delete, path, params).await
    }

    // ========================================================================
    // Price Endpoints
    // ========================================================================

    /// Get price endpoints
    pub fn prices(&self) -> PriceEndpoints<'_> {
        PriceEndpoints::new(self)
    }

    /// Get the current spot price of `base` in `quote`
    pub async fn get_spot_price(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.prices().spot(base, quote).await
    }

    /// Get the price to buy one `base` in `quote`, fees included
    pub async fn get_buy_price(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.prices().buy(base, quote).await
    }

    /// Get the price received for selling one `base` in `quote`
    pub async fn get_sell_price(&self, base: &str, quote: &str) -> RestResult<SpotPrice> {
        self.prices().sell(base, quote).await
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// List the first page of accounts
    pub async fn list_accounts(&self) -> RestResult<Accounts> {
        self.accounts().list(&ListParams::default()).await
    }

    /// Get one account by id
    pub async fn get_account(&self, account_id: &str) -> RestResult<Account> {
        self.accounts().get(account_id).await
    }

    /// Create a new one-time deposit address for an account
    pub async fn create_address(&self, account_id: &str) -> RestResult<Address> {
        self.accounts()
            .create_address(account_id, &CreateAddress::default())
            .await
    }

    /// List the first page of an account's addresses
    pub async fn list_addresses(&self, account_id: &str) -> RestResult<Addresses> {
        self.accounts()
            .list_addresses(account_id, &ListParams::default())
            .await
    }

    /// List the first page of an account's transactions
    pub async fn list_transactions(&self, account_id: &str) -> RestResult<Transactions> {
        self.accounts()
            .list_transactions(account_id, &ListParams::default())
            .await
    }

    /// Get one transaction of an account
    pub async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> RestResult<Transaction> {
        self.accounts()
            .get_transaction(account_id, transaction_id)
            .await
    }
}

impl std::fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Map a response onto `T` or a classified error
///
/// Non-success statuses never reach the decoder, so `T` is produced only for
/// successful calls.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> RestResult<T> {
    if !status.is_success() {
        return Err(RestError::from_response(
            status,
            &String::from_utf8_lossy(body),
        ));
    }

    // Invalid UTF-8 is rejected by the decoder, never patched over
    let payload: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(payload).map_err(|source| RestError::Decode {
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Parse a base URL, forcing a trailing `/` so relative paths append to it
fn parse_base_url(raw: &str) -> RestResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| RestError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(RestError::Configuration(format!(
            "base URL {raw:?} cannot have relative paths"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, defaults to [`DEFAULT_BASE_URL`]
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Value for the `CB-VERSION` header (e.g. `2024-01-01`)
    pub api_version: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            api_version: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Pin the API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }
}
