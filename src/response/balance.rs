use serde::Deserialize;

/// The marketplace's balance used to fulfill purchases.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    /// Available funds in RUB.
    #[serde(default)]
    pub available: f64,
}
