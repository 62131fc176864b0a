use super::Item;
use crate::types::Page;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// A page of items from the marketplace listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ItemsPage {
    #[serde(default)]
    pub items: Vec<Item>,
    /// The number of items matching the search across all pages.
    #[serde(default)]
    pub total: u64,
    /// The page number of this page.
    #[serde(default = "first_page")]
    pub page: Page,
    /// The number of pages matching the search.
    #[serde(default = "first_page")]
    pub pages: Page,
    /// A notice from the backend, e.g. when its item cache has not been loaded yet.
    #[serde(default)]
    pub message: Option<String>,
    /// When the backend last refreshed its item cache.
    #[serde(default)]
    pub cache_timestamp: Option<NaiveDateTime>,
}

fn first_page() -> Page {
    1
}
