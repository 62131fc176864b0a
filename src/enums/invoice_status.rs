use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The status reported by the host's payment sheet when an invoice is closed.
#[derive(Serialize, Deserialize, Display, EnumString, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InvoiceStatus {
    /// The invoice was paid.
    Paid,
    /// Payment failed.
    Failed,
    /// The user closed the sheet without paying.
    Cancelled,
    /// Payment is still being processed.
    Pending,
}

impl InvoiceStatus {
    /// Whether this status means the payment did not go through.
    pub fn is_unsuccessful(&self) -> bool {
        matches!(self, Self::Failed | Self::Cancelled)
    }
}
