//! Typed client for the storefront backend's REST endpoints.

mod api;
mod builder;
mod helpers;

pub use api::StorefrontAPI;
pub use builder::StorefrontAPIBuilder;
pub use helpers::referral_link;
