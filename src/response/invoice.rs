use serde::Deserialize;

/// An invoice created for a purchase.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    /// The link to open in the host's payment sheet.
    pub invoice_link: String,
}
