//! The storefront client: view state plus the actions a user can take.

mod builder;
mod pagination;
mod storefront;
mod view;

pub use builder::StorefrontBuilder;
pub use pagination::Pagination;
pub use storefront::{LoadOutcome, Storefront};
pub use view::{ListingView, ProfileView};
