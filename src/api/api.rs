use super::StorefrontAPIBuilder;
use crate::error::Error;
use crate::helpers::{check_response, parses_response};
use crate::request::{BindSteam, CreateInvoice, GetItemsOptions};
use crate::response::{Balance, Invoice, ItemPrice, ItemsPage, Profile};
use crate::types::{HttpClient, UserId};
use reqwest::StatusCode;

/// The API for the storefront backend. Each method makes exactly one request.
#[derive(Debug, Clone)]
pub struct StorefrontAPI {
    pub(crate) client: HttpClient,
    /// The base URL of the backend, without a trailing slash.
    pub(crate) backend_url: String,
}

impl StorefrontAPI {
    /// Builder for constructing a [`StorefrontAPI`].
    pub fn builder<T>(backend_url: T) -> StorefrontAPIBuilder
    where
        T: Into<String>,
    {
        StorefrontAPIBuilder::new(backend_url)
    }

    pub(crate) fn get_url(&self, pathname: &str) -> String {
        format!("{}{}", self.backend_url, pathname)
    }

    /// Gets the profile of a user. Responds with [`Error::NotActivated`] if the user has not
    /// started the bot yet.
    pub async fn get_profile(&self, user_id: UserId) -> Result<Profile, Error> {
        let uri = self.get_url(&format!("/api/profile/{user_id}"));
        let response = self.client.get(&uri)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotActivated);
        }

        let mut profile: Profile = parses_response(response).await?;

        profile.user_id = user_id;

        Ok(profile)
    }

    /// Claims the referral gift of a user.
    pub async fn claim_gift(&self, user_id: UserId) -> Result<(), Error> {
        let uri = self.get_url(&format!("/api/claim_gift/{user_id}"));
        let response = self.client.post(&uri)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        check_response(response).await?;

        log::debug!("Claimed gift for {user_id}");

        Ok(())
    }

    /// Gets a page of marketplace items.
    pub async fn get_items(&self, options: &GetItemsOptions) -> Result<ItemsPage, Error> {
        let uri = self.get_url("/api/items");

        log::debug!("Loading items {uri} {options:?}");

        let response = self.client.get(&uri)
            .query(options)
            .send()
            .await?;
        let body: ItemsPage = parses_response(response).await?;

        Ok(body)
    }

    /// Creates a Telegram Stars invoice for an item.
    pub async fn create_invoice(&self, invoice: &CreateInvoice) -> Result<Invoice, Error> {
        let uri = self.get_url("/api/create_invoice");

        log::debug!("Creating invoice {invoice:?}");

        let response = self.client.post(&uri)
            .json(invoice)
            .send()
            .await?;
        let body: Invoice = parses_response(response).await?;

        Ok(body)
    }

    /// Binds a Steam profile and trade link to a user.
    pub async fn bind_steam(&self, user_id: UserId, bind: &BindSteam) -> Result<(), Error> {
        let uri = self.get_url(&format!("/api/bind/{user_id}"));
        let response = self.client.post(&uri)
            .json(bind)
            .send()
            .await?;

        check_response(response).await?;

        Ok(())
    }

    /// Gets the marketplace's balance available for fulfilling purchases.
    pub async fn get_balance(&self) -> Result<Balance, Error> {
        let uri = self.get_url("/api/balance");
        let response = self.client.get(&uri)
            .send()
            .await?;
        let body: Balance = parses_response(response).await?;

        Ok(body)
    }

    /// Gets the current price and availability of a product.
    pub async fn get_item_price(&self, product_id: &str) -> Result<ItemPrice, Error> {
        let uri = self.get_url("/api/item_price");
        let response = self.client.get(&uri)
            .query(&[("product_id", product_id)])
            .send()
            .await?;
        let body: ItemPrice = parses_response(response).await?;

        Ok(body)
    }
}
