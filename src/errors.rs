//! Unified error types for `InventoryBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`]. Upstream failures that abort an
//! inventory lookup bubble up through these variants to the command layer, which logs them
//! and shows a single fixed message to the user.

use thiserror::Error;

/// All errors that can occur in the bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A required environment variable is missing or invalid
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Transport-level or HTTP status failure talking to an upstream API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An upstream response body did not match the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The currency API answered but the buy rate could not be extracted
    #[error("Exchange rate unavailable: {message}")]
    ExchangeRate {
        /// What was wrong with the response
        message: String,
    },

    /// A market price string could not be parsed as a number
    #[error("Invalid market price: {raw:?}")]
    PriceParse {
        /// The raw price string as returned by the market
        raw: String,
    },

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
