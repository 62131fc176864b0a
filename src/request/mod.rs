//! Requests to the storefront backend.

mod bind_steam;
mod create_invoice;
mod get_items;

pub use bind_steam::BindSteam;
pub use create_invoice::CreateInvoice;
pub use get_items::{GetItemsOptions, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
