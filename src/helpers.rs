use std::time::Duration;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use crate::error::Error;

pub const USER_AGENT_STRING: &str = concat!("skin-storefront/", env!("CARGO_PKG_VERSION"));
/// The header tunnelled development backends check before serving anything but an interstitial
/// page.
pub const NGROK_SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

/// Builds the client used for backend requests. Every request accepts JSON and carries
/// `default_headers`. No retry middleware is installed; a failed request is left for the user to
/// repeat.
pub fn get_default_middleware(
    user_agent: &str,
    default_headers: &[(String, String)],
    timeout: Option<Duration>,
) -> Result<ClientWithMiddleware, Error> {
    let mut headers = header::HeaderMap::new();

    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_str(user_agent)
            .map_err(|_| Error::Parameter("Invalid user agent"))?,
    );
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

    for (name, value) in default_headers {
        let name = header::HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::Parameter("Invalid header name"))?;
        let value = header::HeaderValue::from_str(value)
            .map_err(|_| Error::Parameter("Invalid header value"))?;

        headers.insert(name, value);
    }

    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(ClientBuilder::new(builder.build()?).build())
}

/// Checks the status of a response, returning its body when successful. Any other status is an
/// [`Error::Http`] carrying the text the server sent.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.bytes().await?);
    }

    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();

    log::error!("Request to {path} failed with {status}: {body}");

    Err(Error::Http {
        status,
        body,
    })
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    serde_json::from_slice::<D>(&body)
        .map_err(|error| {
            log::debug!("Unexpected response body: {}", String::from_utf8_lossy(&body));
            Error::Parse(error)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_headers() {
        let headers = vec![(String::from("bad header"), String::from("1"))];
        let result = get_default_middleware(USER_AGENT_STRING, &headers, None);

        assert!(matches!(result, Err(Error::Parameter("Invalid header name"))));
    }

    #[test]
    fn builds_client_with_extra_headers() {
        let headers = vec![(String::from(NGROK_SKIP_BROWSER_WARNING), String::from("69420"))];

        assert!(get_default_middleware(USER_AGENT_STRING, &headers, Some(Duration::from_secs(10))).is_ok());
    }
}
