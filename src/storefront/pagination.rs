use crate::request::GetItemsOptions;
use crate::types::Page;
use std::sync::atomic::{AtomicBool, Ordering};

/// Search and pagination state for the item listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// The next page to fetch.
    pub page: Page,
    /// Whether more pages remain.
    pub has_more: bool,
    /// The search text.
    pub query: String,
    /// Bumped on every reset so responses to requests made before it can be discarded.
    pub(crate) generation: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
            query: String::new(),
            generation: 0,
        }
    }
}

impl Pagination {
    /// Starts over from the first page with a new search.
    pub fn reset<T>(&mut self, query: T)
    where
        T: Into<String>,
    {
        self.page = 1;
        self.has_more = true;
        self.query = query.into().trim().to_string();
        self.generation = self.generation.wrapping_add(1);
    }

    /// The request for the next page, or `None` when no more pages remain.
    pub fn next_request(&self, limit: u32) -> Option<GetItemsOptions> {
        if !self.has_more {
            return None;
        }

        Some(GetItemsOptions::new(self.page, limit, self.query.as_str()))
    }

    /// Records a fetched page. `returned` is the number of items on the page, `limit` the page
    /// size that was asked for and `pages` the total number of pages reported by the backend.
    /// A short page means there is nothing after it, whatever the reported total says.
    pub fn advance(&mut self, returned: usize, limit: u32, pages: Page) {
        if returned == 0 {
            self.has_more = false;
            return;
        }

        self.has_more = returned >= limit as usize && self.page < pages;
        self.page += 1;
    }
}

/// Allows one request at a time.
#[derive(Debug, Default)]
pub(crate) struct InFlight(AtomicBool);

impl InFlight {
    /// Claims the slot, or returns `None` if a request is already in flight. The slot is
    /// released when the guard is dropped.
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

pub(crate) struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
