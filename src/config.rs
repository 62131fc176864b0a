//! Configuration for connecting to a storefront backend.

use std::time::Duration;
use crate::error::Error;
use crate::helpers::{NGROK_SKIP_BROWSER_WARNING, USER_AGENT_STRING};
use crate::request::DEFAULT_PAGE_SIZE;

pub const ENV_BACKEND_URL: &str = "STOREFRONT_BACKEND_URL";
pub const ENV_BOT_USERNAME: &str = "STOREFRONT_BOT_USERNAME";
pub const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";
pub const ENV_SKIP_NGROK_WARNING: &str = "STOREFRONT_SKIP_NGROK_WARNING";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "STOREFRONT_REQUEST_TIMEOUT_SECS";

/// Settings for a storefront client.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// The base URL of the backend, e.g. `https://shop.example.com`.
    pub backend_url: String,
    /// The username of the bot the storefront belongs to. Used for referral links.
    pub bot_username: String,
    /// The number of items to fetch per page.
    pub page_size: u32,
    /// User agent for requests.
    pub user_agent: String,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// Timeout for each request. No timeout when `None`.
    pub request_timeout: Option<Duration>,
}

impl StorefrontConfig {
    /// Creates a new [`StorefrontConfig`] with default settings.
    pub fn new<T, U>(backend_url: T, bot_username: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            backend_url: backend_url.into(),
            bot_username: bot_username.into(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: USER_AGENT_STRING.to_string(),
            default_headers: Vec::new(),
            request_timeout: None,
        }
    }

    /// Reads the configuration from environment variables. `STOREFRONT_BACKEND_URL` and
    /// `STOREFRONT_BOT_USERNAME` are required. Load a `.env` file beforehand if you keep
    /// them there.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup(ENV_BACKEND_URL)
            .ok_or(Error::Parameter("STOREFRONT_BACKEND_URL missing"))?;
        let bot_username = lookup(ENV_BOT_USERNAME)
            .ok_or(Error::Parameter("STOREFRONT_BOT_USERNAME missing"))?;
        let mut config = Self::new(backend_url, bot_username);

        if let Some(page_size) = lookup(ENV_PAGE_SIZE) {
            config.page_size = page_size.parse()
                .map_err(|_| Error::Parameter("STOREFRONT_PAGE_SIZE must be a number"))?;
        }

        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = secs.parse()
                .map_err(|_| Error::Parameter("STOREFRONT_REQUEST_TIMEOUT_SECS must be a number"))?;

            config.request_timeout = Some(Duration::from_secs(secs));
        }

        if lookup(ENV_SKIP_NGROK_WARNING).is_some_and(|value| value == "1" || value == "true") {
            config = config.skip_ngrok_warning();
        }

        Ok(config)
    }

    /// Sends the header that tells ngrok tunnels to skip their browser warning page.
    pub fn skip_ngrok_warning(mut self) -> Self {
        self.default_headers.push((
            NGROK_SKIP_BROWSER_WARNING.to_string(),
            String::from("69420"),
        ));
        self
    }
}
