use crate::types::Stars;
use serde::Deserialize;

/// The current price and availability of a product.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ItemPrice {
    pub price_stars: Stars,
    /// The price in RUB the marketplace pays for the product.
    #[serde(default)]
    pub price_rub: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl ItemPrice {
    pub fn is_in_stock(&self) -> bool {
        self.quantity != Some(0)
    }
}
