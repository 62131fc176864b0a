use super::pagination::InFlight;
use super::storefront::State;
use super::Storefront;
use crate::api::{StorefrontAPI, StorefrontAPIBuilder};
use crate::config::StorefrontConfig;
use crate::error::Error;
use crate::host::Host;
use crate::request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use std::sync::RwLock;

/// Builder for constructing a [`Storefront`].
pub struct StorefrontBuilder<H> {
    /// The API to make requests with.
    pub(crate) api: StorefrontAPI,
    /// The host platform.
    pub(crate) host: H,
    /// The username of the bot, used for referral links.
    pub(crate) bot_username: String,
    /// The number of items to fetch per page. Defaults to 20.
    pub(crate) page_size: u32,
}

impl<H> StorefrontBuilder<H>
where
    H: Host,
{
    /// Creates a new [`StorefrontBuilder`].
    pub fn new(api: StorefrontAPI, host: H) -> Self {
        Self {
            api,
            host,
            bot_username: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates a new [`StorefrontBuilder`] with the API and settings described by `config`.
    pub fn from_config(config: &StorefrontConfig, host: H) -> Result<Self, Error> {
        let api = StorefrontAPIBuilder::from(config).build()?;

        Ok(Self::new(api, host)
            .bot_username(config.bot_username.clone())
            .page_size(config.page_size))
    }

    /// The username of the bot the storefront belongs to.
    pub fn bot_username<T>(mut self, bot_username: T) -> Self
    where
        T: Into<String>,
    {
        self.bot_username = bot_username.into();
        self
    }

    /// The number of items to fetch per page. Clamped to what the backend accepts.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        self
    }

    /// Builds the [`Storefront`].
    pub fn build(self) -> Storefront<H> {
        Storefront {
            api: self.api,
            host: self.host,
            bot_username: self.bot_username,
            page_size: self.page_size,
            state: RwLock::new(State::default()),
            loading: InFlight::default(),
        }
    }
}
