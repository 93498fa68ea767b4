use serde::{Deserialize, Serialize};

/// Paging information sent with list calls and echoed back by the API.
///
/// `page`/`per_page` drive offset-style paging; `starting_after` carries the
/// opaque cursor for cursor-style paging. `next` and `total_pages` are only
/// ever populated by a response and are never serialized into a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(default, skip_serializing)]
    pub next: Option<PageCursor>,
    #[serde(default, skip_serializing)]
    pub total_pages: Option<i64>,
}

impl PageParams {
    pub fn page(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    /// Whether the response this came from has more pages after it.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// The cursor for the following page, echoed inside `pages.next`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageCursor {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub starting_after: String,
}
