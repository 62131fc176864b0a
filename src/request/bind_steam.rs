use crate::error::Error;
use crate::trade_link::TradeLink;
use serde::Serialize;

/// A request to bind a Steam profile and trade link to a user.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BindSteam {
    /// The Steam profile URL.
    pub profile: String,
    /// The trade offer URL.
    pub trade_link: String,
}

impl BindSteam {
    /// Creates a new [`BindSteam`]. Both fields are required and the trade link must be a valid
    /// trade offer URL.
    pub fn new(profile: &str, trade_link: &str) -> Result<Self, Error> {
        let profile = profile.trim();
        let trade_link = trade_link.trim();

        if profile.is_empty() || trade_link.is_empty() {
            return Err(Error::Parameter("Both the Steam profile and the trade link are required"));
        }

        let trade_link = TradeLink::parse(trade_link)?;

        Ok(Self {
            profile: profile.to_string(),
            trade_link: trade_link.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade_link::TradeLinkError;

    #[test]
    fn requires_both_fields() {
        assert!(matches!(BindSteam::new("", "x"), Err(Error::Parameter(_))));
        assert!(matches!(BindSteam::new("https://steamcommunity.com/id/someone", " "), Err(Error::Parameter(_))));
    }

    #[test]
    fn validates_trade_link() {
        let error = BindSteam::new(
            "https://steamcommunity.com/id/someone",
            "https://steamcommunity.com/tradeoffer/new/?partner=abc&token=x",
        ).unwrap_err();

        assert!(matches!(error, Error::TradeLink(TradeLinkError::InvalidPartner)));
    }

    #[test]
    fn normalizes_trade_link() {
        let bind = BindSteam::new(
            " https://steamcommunity.com/id/someone ",
            "https://steamcommunity.com/tradeoffer/new/?partner=1&amp;token=abc",
        ).unwrap();

        assert_eq!(bind.profile, "https://steamcommunity.com/id/someone");
        assert_eq!(bind.trade_link, "https://steamcommunity.com/tradeoffer/new/?partner=1&token=abc");
    }
}
