//! Client-side validation of Steam trade offer URLs.

use std::fmt;
use std::str::FromStr;
use lazy_regex::regex_is_match;
use steamid_ng::SteamID;

const HOSTNAMES: [&str; 2] = ["steamcommunity.com", "www.steamcommunity.com"];
const PATHNAME: &str = "/tradeoffer/new";
/// Added to an account ID to get the 64-bit ID of an individual account in the public universe.
const STEAMID64_BASE: u64 = 76561197960265728;

#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum TradeLinkError {
    #[error("Malformed URL")]
    Malformed,
    #[error("Not a steamcommunity.com URL")]
    Host,
    #[error("Not a trade offer URL")]
    Path,
    #[error("Missing partner")]
    MissingPartner,
    #[error("Partner must be numeric")]
    InvalidPartner,
    #[error("Missing token")]
    MissingToken,
    #[error("Token contains invalid characters")]
    InvalidToken,
}

/// A Steam trade offer URL, e.g.
/// `https://steamcommunity.com/tradeoffer/new/?partner=59566827&token=CBl2pinD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeLink {
    url: String,
    /// The account ID of the partner.
    pub partner: u32,
    /// The access token for sending offers to a partner you are not friends with.
    pub token: String,
}

impl TradeLink {
    /// Parses and validates a trade offer URL. Surrounding whitespace and HTML-escaped
    /// ampersands (`&amp;`) are tolerated since links are often pasted from web pages.
    pub fn parse(trade_link: &str) -> Result<Self, TradeLinkError> {
        let trade_link = trade_link.trim().replace("&amp;", "&");
        let url = url::Url::parse(&trade_link)
            .map_err(|_| TradeLinkError::Malformed)?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(TradeLinkError::Malformed);
        }

        match url.host_str() {
            Some(hostname) if HOSTNAMES.contains(&hostname) => {},
            _ => return Err(TradeLinkError::Host),
        }

        let pathname = url.path();

        if pathname != PATHNAME && !pathname.starts_with(&format!("{PATHNAME}/")) {
            return Err(TradeLinkError::Path);
        }

        let mut partner = None;
        let mut token = None;
        // `+` is a literal token character here, not an encoded space.
        let query = url.query().unwrap_or_default().replace('+', "%2B");

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "partner" if partner.is_none() => partner = Some(value.into_owned()),
                "token" if token.is_none() => token = Some(value.into_owned()),
                _ => {},
            }
        }

        let partner = partner
            .filter(|partner| !partner.is_empty())
            .ok_or(TradeLinkError::MissingPartner)?;

        if !regex_is_match!(r"^[0-9]+$", &partner) {
            return Err(TradeLinkError::InvalidPartner);
        }

        let partner = partner.parse::<u32>()
            .map_err(|_| TradeLinkError::InvalidPartner)?;
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(TradeLinkError::MissingToken)?;

        if !regex_is_match!(r"^[A-Za-z0-9_+\-]+$", &token) {
            return Err(TradeLinkError::InvalidToken);
        }

        Ok(Self {
            url: trade_link,
            partner,
            token,
        })
    }

    /// The [`SteamID`] of the partner.
    pub fn steamid(&self) -> SteamID {
        SteamID::from(STEAMID64_BASE + u64::from(self.partner))
    }

    /// The URL as given, with HTML entities decoded.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl FromStr for TradeLink {
    type Err = TradeLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TradeLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Checks whether `trade_link` is an acceptable trade offer URL.
pub fn is_valid_trade_link(trade_link: &str) -> bool {
    TradeLink::parse(trade_link).is_ok()
}
