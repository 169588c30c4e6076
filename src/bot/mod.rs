//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the InventoryBuddy application,
//! including the slash commands, button handling, and bot context management.

/// Discord command implementations (inventory, general)
pub mod commands;
/// Discord interaction handlers (buttons)
pub mod handlers;

use crate::{config::AppConfig, core::steam::InventoryApi, errors::Error};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
/// Holds the configuration and the upstream API client. Nothing in here is mutated after
/// startup, so concurrent invocations need no locking.
pub struct BotData {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Upstream API client used for inventory lookups
    pub api: Arc<dyn InventoryApi>,
}

impl BotData {
    /// Creates a new `BotData` instance from the configuration and API client.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, api: Arc<dyn InventoryApi>) -> Self {
        Self { config, api }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup {
            error, framework, ..
        } => {
            // Stop the gateway so `run_bot` returns.
            error!("Failed to start bot, shutting down: {error:?}");
            framework.shard_manager().shutdown_all().await;
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework and runs the Discord client until it stops.
///
/// # Errors
/// Returns the serenity error if the client cannot be created or the connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::inventory(), commands::ping(), commands::help()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    // Slash commands and buttons need no privileged intents.
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))
}

pub use commands::*;
