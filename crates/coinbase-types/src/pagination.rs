//! Cursor pagination metadata

use serde::{Deserialize, Serialize};

/// Pagination block returned alongside list responses
///
/// Informational only. Absent or `null` cursors decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub ending_before: Option<String>,
    #[serde(default)]
    pub starting_after: Option<String>,
    #[serde(default)]
    pub previous_ending_before: Option<String>,
    #[serde(default)]
    pub next_starting_after: Option<String>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// `asc` or `desc`
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub previous_uri: Option<String>,
    #[serde(default)]
    pub next_uri: Option<String>,
}

impl Pagination {
    /// Whether the server advertised a following page
    pub fn has_next(&self) -> bool {
        self.next_uri.as_deref().is_some_and(|uri| !uri.is_empty())
    }
}
