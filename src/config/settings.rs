//! Application configuration loading from config.toml
//!
//! Every section and field has a default, so the bot runs without a config file at all.
//! A config file only needs to name the values it wants to change.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Steam inventory settings
    pub steam: SteamConfig,
    /// Market pricing and currency conversion settings
    pub pricing: PricingConfig,
    /// Message and button behavior
    pub presentation: PresentationConfig,
    /// Upstream API base URLs
    pub endpoints: EndpointConfig,
    /// Extra arcana-to-hero entries, merged over the built-in catalog
    pub arcana: HashMap<String, String>,
}

/// Which inventory to read and how to page through it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    /// Steam app id of the game (570 is Dota 2)
    pub app_id: u32,
    /// Inventory context id (2 holds the game's items)
    pub context_id: u32,
    /// Language for item descriptions; type matching expects English
    pub language: String,
    /// Number of assets requested per inventory page
    pub page_size: u32,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            app_id: 570,
            context_id: 2,
            language: "english".to_string(),
            page_size: 2000,
        }
    }
}

/// Market price lookup and currency conversion
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Steam market currency code of the quoted prices (1 is USD)
    pub currency_code: u32,
    /// Label appended to converted prices
    pub currency_label: String,
    /// Minimum spacing between two market price requests
    pub request_interval_secs: u64,
    /// Index of the USD entry in the exchange API response array
    pub exchange_rate_index: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_code: 1,
            currency_label: "UAH".to_string(),
            request_interval_secs: 7,
            exchange_rate_index: 1,
        }
    }
}

impl PricingConfig {
    /// Spacing between price requests as a `Duration`.
    #[must_use]
    pub const fn request_interval(&self) -> Duration {
        Duration::from_secs(self.request_interval_secs)
    }
}

/// How results are shown in Discord
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// How long the buttons stay active after the summary is shown
    pub collector_timeout_secs: u64,
    /// Name shown when the profile has no display name
    pub default_player_name: String,
    /// Thumbnail shown when the profile has no avatar
    pub default_avatar_url: String,
    /// Hero label used for arcanas missing from the catalog
    pub unknown_hero: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            collector_timeout_secs: 60,
            default_player_name: "Player".to_string(),
            default_avatar_url: "https://example.com/default-avatar.png".to_string(),
            unknown_hero: "Unknown hero".to_string(),
        }
    }
}

impl PresentationConfig {
    /// Button lifetime as a `Duration`.
    #[must_use]
    pub const fn collector_timeout(&self) -> Duration {
        Duration::from_secs(self.collector_timeout_secs)
    }
}

/// Base URLs of every upstream API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Steam Web API (player summaries)
    pub steam_api_base: String,
    /// Steam Community (inventory and market)
    pub community_base: String,
    /// Full URL of the currency exchange endpoint
    pub exchange_url: String,
    /// Full URL of the item constants endpoint
    pub constants_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            steam_api_base: "https://api.steampowered.com".to_string(),
            community_base: "https://steamcommunity.com".to_string(),
            exchange_url: "https://api.privatbank.ua/p24api/pubinfo?exchange&coursid=11"
                .to_string(),
            constants_url: "https://api.opendota.com/api/constants/items".to_string(),
        }
    }
}

/// Parses configuration from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Loads configuration from `CONFIG_PATH` (default `./config.toml`).
///
/// A missing file is not an error: the built-in defaults are used instead.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    if !Path::new(&path).exists() {
        tracing::info!("No config file at {path}, using defaults");
        return Ok(AppConfig::default());
    }

    tracing::debug!("Loading configuration from {path}");
    load_config(&path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.steam.app_id, 570);
        assert_eq!(config.steam.context_id, 2);
        assert_eq!(config.pricing.currency_label, "UAH");
        assert_eq!(config.pricing.request_interval(), Duration::from_secs(7));
        assert_eq!(config.presentation.collector_timeout(), Duration::from_secs(60));
        assert_eq!(config.presentation.default_player_name, "Player");
        assert!(config.arcana.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let toml_str = r#"
            [pricing]
            currency_label = "EUR"
            request_interval_secs = 3

            [arcana]
            "Test Arcana" = "Test Hero"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.pricing.currency_label, "EUR");
        assert_eq!(config.pricing.request_interval_secs, 3);
        assert_eq!(config.pricing.exchange_rate_index, 1);
        assert_eq!(config.steam.language, "english");
        assert_eq!(config.arcana.get("Test Arcana").unwrap(), "Test Hero");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let result = parse_config("[steam]\napp_id = \"not a number\"");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
