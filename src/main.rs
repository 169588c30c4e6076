use dotenvy::dotenv;
use inventory_buddy::{
    bot::{self, BotData},
    config::{self, secrets},
    core::client::HttpInventoryApi,
    errors::{Error, Result},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Build the upstream API client (Steam key is read once, here)
    let steam_api_key = secrets::steam_api_key()?;
    let api = HttpInventoryApi::new(steam_api_key, &app_config)
        .inspect_err(|e| error!("Failed to build HTTP client: {e}"))?;

    // 5. Run the bot
    let token = secrets::discord_token()?;
    let data = BotData::new(Arc::new(app_config), Arc::new(api));

    bot::run_bot(token, data).await.map_err(Error::from)?;

    Ok(())
}
