use crate::types::UserId;

/// The link that starts the bot with `user_id` as the referrer.
pub fn referral_link(bot_username: &str, user_id: UserId) -> String {
    let bot_username = bot_username.trim_start_matches('@');

    format!("t.me/{bot_username}?start={user_id}")
}
