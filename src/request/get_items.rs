use crate::types::Page;
use serde::Serialize;

/// The number of items to fetch per page by default.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// The smallest page size the backend accepts.
pub const MIN_PAGE_SIZE: u32 = 5;
/// The largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Options for listing marketplace items.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GetItemsOptions {
    /// The page to fetch, starting at `1`.
    pub page: Page,
    /// The number of items per page. Clamped to what the backend accepts.
    pub limit: u32,
    /// Only list items with names containing this text, case-insensitively. Not sent when blank.
    #[serde(skip_serializing_if = "is_blank")]
    pub search: String,
}

impl Default for GetItemsOptions {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl GetItemsOptions {
    /// Creates a new [`GetItemsOptions`]. The page number must be at least `1` and the page
    /// size is clamped to between [`MIN_PAGE_SIZE`] and [`MAX_PAGE_SIZE`].
    pub fn new<T>(page: Page, limit: u32, search: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            page: page.max(1),
            limit: limit.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
            search: search.into().trim().to_string(),
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
