//! API endpoint implementations

pub mod accounts;
pub mod prices;

pub use accounts::AccountEndpoints;
pub use prices::PriceEndpoints;

use serde::Serialize;

use crate::error::{RestError, RestResult};

/// Sort order for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// Cursor parameters accepted by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page size (API default 25, max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Return records after this id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Return records before this id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

impl ListParams {
    /// Create empty list parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set sort order
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Continue after the given record id
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Stop before the given record id
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }
}

/// Validate a value interpolated into a URL path
pub(crate) fn path_segment<'a>(name: &str, value: &'a str) -> RestResult<&'a str> {
    if value.is_empty() || value.contains(['/', '?', '#', '%']) || value == "." || value == ".." {
        return Err(RestError::InvalidParameter(format!(
            "{name} {value:?} is not a valid path segment"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_query() {
        let params = ListParams::new()
            .with_limit(100)
            .with_order(Order::Asc)
            .starting_after("abc");

        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "limit=100&order=asc&starting_after=abc"
        );
        assert_eq!(serde_urlencoded::to_string(ListParams::default()).unwrap(), "");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("account id", "2bbf394c").unwrap(), "2bbf394c");
        for bad in ["", "a/b", "a?b", "a#b", "..", "%2F"] {
            assert!(path_segment("account id", bad).is_err(), "{bad} accepted");
        }
    }
}
