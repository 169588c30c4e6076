//! Secrets loaded from environment variables.
//!
//! Secrets never live in config.toml. They are read once at startup (after `.env` has been
//! loaded) and handed to the components that need them.

use crate::errors::Result;

/// Environment variable holding the Steam Web API key
pub const STEAM_API_KEY_VAR: &str = "STEAM_API_KEY";

/// Environment variable holding the Discord bot token
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Reads the Steam Web API key used for player summary lookups.
///
/// # Errors
/// Returns `Error::EnvVar` if `STEAM_API_KEY` is not set.
pub fn steam_api_key() -> Result<String> {
    read_required(STEAM_API_KEY_VAR)
}

/// Reads the Discord bot token.
///
/// # Errors
/// Returns `Error::EnvVar` if `DISCORD_BOT_TOKEN` is not set.
pub fn discord_token() -> Result<String> {
    read_required(DISCORD_TOKEN_VAR)
}

fn read_required(name: &str) -> Result<String> {
    std::env::var(name)
        .inspect_err(|e| tracing::error!("{name} not found: {e}"))
        .map_err(Into::into)
}
