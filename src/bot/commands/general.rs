//! General Discord commands - ping and help.
//! This module contains simple commands that don't call any upstream API
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let pricing = &ctx.data().config.pricing;
        let timeout = ctx.data().config.presentation.collector_timeout_secs;
        let help_text = format!(
            "**InventoryBuddy Help**\n\
            Looks up a Dota 2 inventory and prices it on the Steam market.\n\n\
            **Commands**\n\
            • `/inventory <steamid>` - Prices an inventory. Accepts a SteamID64 or a \
            `https://steamcommunity.com/profiles/...` link. The profile and inventory must be public.\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help` - Shows this help message.\n\n\
            Prices are converted to {} and fetched one item every {} seconds, so large \
            inventories take a while. The summary buttons stay active for {} seconds.",
            pricing.currency_label, pricing.request_interval_secs, timeout
        );

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
