use crate::types::{ItemId, Stars, UserId};
use serde::Serialize;

/// A request to create a Telegram Stars invoice for an item.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateInvoice {
    pub item_id: ItemId,
    /// The ID of the product at the upstream marketplace.
    pub product_id: String,
    pub user_id: UserId,
    pub price_stars: Stars,
}
