use crate::trade_link::TradeLinkError;
use reqwest::StatusCode;
use reqwest_middleware;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    #[error("Invalid trade link: {}", .0)]
    TradeLink(#[from] TradeLinkError),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Invalid URL: {}", .0)]
    Url(#[from] url::ParseError),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error {}: {}", .status, .body)]
    Http {
        status: StatusCode,
        body: String,
    },
    #[error("Account not activated")]
    NotActivated,
    #[error("No trade link bound to this account")]
    TradeLinkNotBound,
    #[error("No user ID supplied by the host")]
    MissingUserId,
    #[error("Item unavailable: {}", .0)]
    Unavailable(UnavailableReason),
}

impl Error {
    /// Whether this is an HTTP error with the given status.
    pub fn is_status(&self, status: StatusCode) -> bool {
        matches!(self, Self::Http { status: s, .. } if *s == status)
    }

    /// The text to surface to the user. For HTTP errors this is the body sent by the server.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { body, .. } if !body.is_empty() => body.clone(),
            error => error.to_string(),
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// Why an item could not be bought after checking it against the backend.
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum UnavailableReason {
    #[error("out of stock")]
    OutOfStock,
    #[error("price changed from {} to {} stars", .listed, .current)]
    PriceChanged {
        listed: u32,
        current: u32,
    },
    #[error("insufficient marketplace balance")]
    InsufficientBalance,
}
