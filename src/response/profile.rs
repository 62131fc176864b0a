use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A user's profile.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Profile {
    /// The user this profile belongs to. Not part of the response body; filled in from the
    /// request.
    #[serde(skip)]
    pub user_id: UserId,
    /// The number of users this user has invited.
    #[serde(default)]
    pub referrals: u32,
    /// Items previously received.
    #[serde(default)]
    pub items: Vec<ReceivedItem>,
    /// The bound Steam profile URL.
    #[serde(default)]
    pub steam_profile: Option<String>,
    /// The bound trade offer URL.
    #[serde(default)]
    pub trade_link: Option<String>,
    /// Whether a referral gift is waiting to be claimed.
    #[serde(default)]
    pub has_gift: bool,
}

impl Profile {
    /// Whether a trade link is bound to this profile.
    pub fn has_trade_link(&self) -> bool {
        self.trade_link
            .as_deref()
            .is_some_and(|trade_link| !trade_link.trim().is_empty())
    }
}

/// An item the user has received.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReceivedItem {
    pub name: String,
    /// When the item was received, as reported by the backend.
    #[serde(default)]
    pub date: Option<String>,
}
