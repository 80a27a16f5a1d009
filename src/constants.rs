// src/constants.rs

/// Display name attached to bot messages at append time. Fixed to the
/// Marathi name regardless of the UI locale, matching the identity the
/// backend speaks with.
pub const BOT_NAME: &str = "मराठी ए.आय.";

/// Avatar glyph shown next to bot messages. Human messages carry no avatar.
pub const BOT_AVATAR: &str = "◉";

pub const DEFAULT_WEBHOOK_URL: &str = "http://0.0.0.0:5005/webhooks/rest/webhook";
