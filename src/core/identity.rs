//! Steam identity resolution.
//!
//! Users may paste either a bare SteamID64 or a full profile URL. Both resolve to the
//! same identifier string.

use regex::Regex;
use std::sync::LazyLock;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    Regex::new(r"https?://steamcommunity\.com/profiles/(\d+)").unwrap()
});

/// Resolves user input into the identifier passed to the Steam APIs.
///
/// If the input contains a `steamcommunity.com/profiles/<digits>` URL, the digits are
/// returned. Anything else is returned as-is (trimmed). No validation happens here; a bad
/// identifier simply yields nothing from the upstream APIs.
#[must_use]
pub fn resolve_steam_id(input: &str) -> String {
    let input = input.trim();
    PROFILE_URL
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| input.to_string(), |m| m.as_str().to_string())
}
