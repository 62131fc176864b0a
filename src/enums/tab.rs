use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The sections of the storefront.
#[derive(Default, Serialize, Deserialize, Display, EnumString, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    /// The landing page. This is the tab shown on start.
    #[default]
    Landing,
    /// The item listing.
    Marketplace,
    /// The user's profile.
    Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_tab_ids() {
        assert_eq!(Tab::from_str("marketplace").unwrap(), Tab::Marketplace);
        assert_eq!(Tab::Profile.to_string(), "profile");
        assert!(Tab::from_str("settings").is_err());
    }
}
