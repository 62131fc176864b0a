use crate::types::{ItemId, Stars};
use serde::{Deserialize, Serialize};

const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/80x60?text=No+Image";

/// An item listed on the marketplace.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Item {
    /// The ID of the listing.
    pub id: ItemId,
    /// The market hash name, e.g. "AK-47 | Redline (Field-Tested)".
    pub name: String,
    /// The URL of the item's image.
    #[serde(default)]
    pub image: Option<String>,
    /// The price in Telegram Stars.
    pub price_stars: Stars,
    /// The approximate price in USD.
    #[serde(default)]
    pub price_usd: Option<f64>,
    /// The price in RUB the marketplace pays for the item.
    #[serde(default)]
    pub price_rub: Option<f64>,
    /// The number available. `None` when the backend does not track it.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// The ID of the product at the upstream marketplace.
    #[serde(default)]
    pub product_id: Option<String>,
}

impl Item {
    /// The product ID to buy this item with. Falls back to the item's name, which is what the
    /// upstream marketplace identifies products by.
    pub fn product_id(&self) -> &str {
        match self.product_id.as_deref() {
            Some(product_id) if !product_id.is_empty() => product_id,
            _ => &self.name,
        }
    }

    /// The URL of the item's image, or a placeholder if there is none.
    pub fn image_url(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}
