//! The surface of the host platform the storefront runs in.

use crate::enums::InvoiceStatus;
use crate::types::UserId;
use async_trait::async_trait;

/// The host platform, i.e. the Telegram client showing the Mini App. Implement this to connect a
/// [`Storefront`](crate::Storefront) to a real WebApp bridge or to a fake in tests.
#[async_trait]
pub trait Host: Send + Sync {
    /// The ID of the current user, if the host supplied one.
    fn user_id(&self) -> Option<UserId>;

    /// Tells the host the app is ready to be shown.
    fn ready(&self);

    /// Hides the host's main button.
    fn hide_main_button(&self);

    /// Opens the payment sheet for an invoice and resolves once it is closed.
    async fn open_invoice(&self, invoice_link: &str) -> InvoiceStatus;

    /// Prompts the user to pick a chat and inserts `query` as an inline query there.
    fn switch_inline_query(&self, query: &str);

    /// Shows a message and resolves once the user dismisses it.
    async fn alert(&self, message: &str);
}
