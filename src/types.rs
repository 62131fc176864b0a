//! Types for common values in storefront requests and responses.

/// The Telegram ID of a user. Supplied by the host platform.
pub type UserId = i64;
/// The ID of an item listing. Assigned by the backend and only meaningful to it.
pub type ItemId = u64;
/// An amount of Telegram Stars (`XTR`).
pub type Stars = u32;
/// A page number for item listings. The first page is `1`.
pub type Page = u32;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
