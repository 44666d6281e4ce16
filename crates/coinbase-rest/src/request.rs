//! Request preparation and per-call options
//!
//! Turns `(method, path, params)` into the exact URL and body that go on the
//! wire, so the signature always covers what the server receives.

use std::future::Future;
use std::time::Duration;

use coinbase_auth::{Method, SignableRequest};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::{Position, Url};

use crate::error::{RestError, RestResult};

/// Pass as `params` for calls without parameters
pub const NO_PARAMS: Option<&'static ()> = None;

/// A request ready to be signed and sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    /// Absolute URL including any query string
    pub url: Url,
    /// JSON body for POST/PUT, empty otherwise
    pub body: Vec<u8>,
}

impl PreparedRequest {
    /// Resolve `path` against `base` and encode `params` for `method`
    ///
    /// GET/DELETE parameters are URL-encoded and appended to any query already
    /// present in `path`. POST/PUT parameters become a JSON body and must
    /// serialize to an object. `None` produces no query string and an empty
    /// body.
    pub fn prepare<P>(
        base: &Url,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> RestResult<Self>
    where
        P: Serialize + ?Sized,
    {
        let mut url = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| RestError::InvalidParameter(format!("invalid path {path:?}: {e}")))?;

        if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
            return Err(RestError::InvalidParameter(format!(
                "path {path:?} escapes the API base URL"
            )));
        }
        url.set_fragment(None);

        let mut body = Vec::new();
        if let Some(params) = params {
            if method.uses_query() {
                let encoded = serde_urlencoded::to_string(params)
                    .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
                if !encoded.is_empty() {
                    let query = match url.query() {
                        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
                        _ => encoded,
                    };
                    url.set_query(Some(&query));
                }
            } else {
                body = serde_json::to_vec(params)
                    .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
                // `{` is always percent-encoded in the path, so an object body
                // cannot be mistaken for path bytes in the signed message
                if body.first() != Some(&b'{') {
                    return Err(RestError::InvalidParameter(
                        "request body must be a JSON object".to_string(),
                    ));
                }
            }
        }

        Ok(Self { method, url, body })
    }

    /// Path and query as sent on the wire, e.g. `/v2/accounts?limit=5`
    pub fn request_path(&self) -> &str {
        &self.url[Position::BeforePath..Position::AfterQuery]
    }

    /// The signing input for this request at `timestamp`
    pub fn signable(&self, timestamp: u64) -> SignableRequest {
        SignableRequest::new(self.method, self.request_path(), timestamp)
            .with_body(self.body.clone())
    }

    /// Method in reqwest's representation
    pub fn http_method(&self) -> reqwest::Method {
        match self.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-call deadline and cancellation
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use coinbase_rest::RequestOptions;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let options = RequestOptions::new()
///     .with_deadline(Duration::from_secs(2))
///     .with_cancellation(token.clone());
/// assert_eq!(options.deadline, Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Upper bound for the whole round trip, including reading the body
    pub deadline: Option<Duration>,
    /// Aborts the call with [`RestError::Cancelled`] once triggered
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// Options with no deadline and no cancellation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Drive `exchange` under these options
    pub(crate) async fn run<F, T>(&self, exchange: F) -> RestResult<T>
    where
        F: Future<Output = Result<T, reqwest::Error>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout(deadline, exchange).await {
                    Ok(result) => result.map_err(RestError::from_transport),
                    Err(_) => Err(RestError::Timeout),
                },
                None => exchange.await.map_err(RestError::from_transport),
            }
        };

        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(RestError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}
