//! Enumerated types.

mod invoice_status;
mod tab;

pub use invoice_status::InvoiceStatus;
pub use tab::Tab;
