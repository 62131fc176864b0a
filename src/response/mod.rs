//! Responses from the storefront backend.

mod balance;
mod invoice;
mod item;
mod item_price;
mod items_page;
mod profile;

pub use balance::Balance;
pub use invoice::Invoice;
pub use item::Item;
pub use item_price::ItemPrice;
pub use items_page::ItemsPage;
pub use profile::{Profile, ReceivedItem};
