use super::StorefrontAPI;
use crate::config::StorefrontConfig;
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`StorefrontAPI`].
#[derive(Debug, Clone)]
pub struct StorefrontAPIBuilder {
    /// The base URL of the backend.
    pub(crate) backend_url: String,
    /// User agent for requests.
    pub(crate) user_agent: String,
    /// Headers sent with every request.
    pub(crate) default_headers: Vec<(String, String)>,
    /// Timeout for each request.
    pub(crate) timeout: Option<Duration>,
    /// Client to use for requests. Overrides the user agent, headers and timeout.
    pub(crate) client: Option<ClientWithMiddleware>,
}

impl StorefrontAPIBuilder {
    /// Creates a new [`StorefrontAPIBuilder`] for the backend at `backend_url`.
    pub fn new<T>(backend_url: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            backend_url: backend_url.into(),
            user_agent: USER_AGENT_STRING.to_string(),
            default_headers: Vec::new(),
            timeout: None,
            client: None,
        }
    }

    /// User agent for requests.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a header sent with every request.
    pub fn header<T, U>(mut self, name: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Client to use for requests, e.g. one with your own middleware.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`StorefrontAPI`].
    pub fn build(self) -> Result<StorefrontAPI, Error> {
        let backend_url = self.backend_url.trim().trim_end_matches('/').to_string();

        // Fail early rather than on the first request.
        url::Url::parse(&backend_url)?;

        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(&self.user_agent, &self.default_headers, self.timeout)?,
        };

        Ok(StorefrontAPI {
            client,
            backend_url,
        })
    }
}

impl From<&StorefrontConfig> for StorefrontAPIBuilder {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            backend_url: config.backend_url.clone(),
            user_agent: config.user_agent.clone(),
            default_headers: config.default_headers.clone(),
            timeout: config.request_timeout,
            client: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let api = StorefrontAPIBuilder::new("https://shop.example.com/").build().unwrap();

        assert_eq!(api.get_url("/api/balance"), "https://shop.example.com/api/balance");
    }

    #[test]
    fn rejects_invalid_backend_url() {
        let result = StorefrontAPIBuilder::new("shop.example.com").build();

        assert!(matches!(result, Err(Error::Url(_))));
    }
}
