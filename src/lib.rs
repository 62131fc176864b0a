//! Client for a CS2 skin storefront that runs as a Telegram Mini App.
//!
//! [`StorefrontAPI`] is a thin typed client for the backend's REST endpoints. [`Storefront`]
//! builds on it to hold the state of the app for one user (the active tab, the item listing
//! and the profile) and to perform the actions a user can take: browsing and searching items,
//! binding a Steam trade link, claiming the referral gift and buying items with Telegram Stars.
//! The Telegram client itself is abstracted behind the [`Host`] trait.

pub mod api;
pub mod config;
pub mod enums;
pub mod error;
pub mod host;
pub mod request;
pub mod response;
pub mod storefront;
pub mod trade_link;
pub mod types;

mod helpers;

pub use api::{StorefrontAPI, StorefrontAPIBuilder};
pub use config::StorefrontConfig;
pub use enums::{InvoiceStatus, Tab};
pub use error::{Error, UnavailableReason};
pub use host::Host;
pub use storefront::{ListingView, LoadOutcome, ProfileView, Storefront, StorefrontBuilder};
pub use trade_link::{is_valid_trade_link, TradeLink, TradeLinkError};

/// Re-export of [`steamid_ng::SteamID`].
pub use steamid_ng::SteamID;
/// Re-export of [`async_trait::async_trait`] for implementing [`Host`].
pub use async_trait::async_trait;
/// Header that skips the ngrok browser warning page on tunnelled backends.
pub use helpers::NGROK_SKIP_BROWSER_WARNING;
