//! Response envelopes
//!
//! Every successful response wraps its payload in a top-level `data` field.
//! List endpoints add a `pagination` block. Failed calls return an `errors`
//! array instead.

use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Non-fatal notice attached to a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope for single-object responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl<T> Data<T> {
    /// Unwrap the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Envelope for list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub pagination: Pagination,
    pub data: Vec<T>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl<T> Page<T> {
    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the records on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// One entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    /// Machine-readable error id, e.g. `not_found`
    pub id: String,
    /// Human-readable message
    pub message: String,
    /// Documentation link, when provided
    #[serde(default)]
    pub url: Option<String>,
}

/// Failure payload
///
/// Accepts the documented `{"errors": [{"id", "message"}]}` form as well as
/// the single-error `{"error", "message"}` and OAuth
/// `{"error", "error_description"}` forms some endpoints return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl ErrorEnvelope {
    /// Parse a response body, returning `None` unless it names at least one error
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|envelope| !envelope.is_empty())
    }

    /// Whether the payload carries no error at all
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.error.is_none()
    }

    /// All errors in normalized form
    pub fn entries(&self) -> Vec<ApiErrorEntry> {
        if !self.errors.is_empty() {
            return self.errors.clone();
        }

        match &self.error {
            Some(id) => vec![ApiErrorEntry {
                id: id.clone(),
                message: self
                    .message
                    .clone()
                    .or_else(|| self.error_description.clone())
                    .unwrap_or_else(|| id.clone()),
                url: None,
            }],
            None => Vec::new(),
        }
    }

    /// First error, which the API treats as the primary cause
    pub fn first(&self) -> Option<ApiErrorEntry> {
        self.entries().into_iter().next()
    }
}
