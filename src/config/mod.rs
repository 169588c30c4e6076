/// Application settings loaded from config.toml
pub mod settings;

/// API keys and tokens from environment variables
pub mod secrets;

pub use settings::{AppConfig, load_app_configuration};
