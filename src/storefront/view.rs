use crate::response::{Item, Profile};
use crate::types::Page;

/// What the profile tab shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileView {
    /// The profile has not been requested yet.
    #[default]
    NotLoaded,
    Loaded(Profile),
    /// The backend does not know the user. They need to start the bot first.
    NotActivated,
    /// Loading failed with this message.
    Failed(String),
}

impl ProfileView {
    /// The profile, if it loaded.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            _ => None,
        }
    }
}

/// A snapshot of what the marketplace tab shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingView {
    /// Items in the order they were fetched.
    pub items: Vec<Item>,
    /// Whether a "load more" control should be shown.
    pub has_more: bool,
    /// The next page to fetch.
    pub page: Page,
    /// The current search text.
    pub query: String,
    /// A notice from the backend about the last page.
    pub notice: Option<String>,
    /// The message of the last failed request. Cleared by the next successful one.
    pub error: Option<String>,
    /// Whether a request is in flight.
    pub loading: bool,
}

impl ListingView {
    /// Whether a search finished without any results.
    pub fn is_nothing_found(&self) -> bool {
        self.items.is_empty() && !self.has_more && self.error.is_none()
    }
}
