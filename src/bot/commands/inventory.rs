//! Inventory command - looks up, prices and presents a player's Dota 2 inventory.
//!
//! Flow of one invocation: defer, show a loading message, run the lookup, then either show
//! the fixed error message or the summary with detail buttons. Buttons answer with ephemeral
//! detail embeds until the subscription deadline, after which they are removed.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            handlers::buttons::{self, ButtonSubscription},
        },
        config::AppConfig,
        core::{
            inventory::{self, InventoryResult},
            summary::{self, DetailView},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{debug, error, info, warn};

    const LOADING_MESSAGE: &str = "⏳ This will take a while...";
    const FAILURE_MESSAGE: &str =
        "🛑 Error. Make sure the Steam profile is public and try again.";
    const SUMMARY_COLOR: u32 = 0x0000_FFFF;

    /// Shows a player's Dota 2 inventory with Steam market prices.
    ///
    /// Prices are looked up one item at a time to stay under the market's rate limit, so
    /// large inventories take a while.
    #[poise::command(slash_command)]
    pub async fn inventory(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Steam ID or profile URL"] steamid: String,
    ) -> Result<()> {
        let data = ctx.data();
        info!(
            "Inventory requested by {} for {steamid}",
            ctx.author().name
        );

        ctx.defer().await?;
        let reply = ctx.say(LOADING_MESSAGE).await?;

        let result =
            match inventory::collect_inventory(data.api.as_ref(), &data.config, &steamid).await {
                Ok(result) => result,
                Err(e) => {
                    error!("Inventory lookup for {steamid} failed: {e}");
                    reply
                        .edit(ctx, poise::CreateReply::default().content(FAILURE_MESSAGE))
                        .await?;
                    return Ok(());
                }
            };
        info!(
            "Inventory for {steamid}: {}",
            summary::plain_summary(&result, &data.config.pricing.currency_label)
        );

        let invocation_id = ctx.id();
        reply
            .edit(
                ctx,
                summary_reply(
                    &result,
                    &data.config,
                    vec![buttons::detail_buttons(invocation_id)],
                ),
            )
            .await?;

        let message = reply.message().await?;
        let mut presses = Box::pin(
            serenity::ComponentInteractionCollector::new(ctx.serenity_context())
                .author_id(ctx.author().id)
                .message_id(message.id)
                .stream(),
        );
        let mut subscription =
            ButtonSubscription::new(data.config.presentation.collector_timeout());

        while let Some(press) = subscription.next(&mut presses).await {
            let Some(view) = buttons::parse_custom_id(&press.data.custom_id, invocation_id) else {
                debug!("Ignoring unknown button {}", press.data.custom_id);
                continue;
            };
            if let Err(e) = send_detail(ctx, &press, view, &result).await {
                warn!("Failed to send {} view: {e}", view.slug());
            }
        }
        drop(presses);

        debug!("Button subscription for invocation {invocation_id} ended");
        reply
            .edit(ctx, summary_reply(&result, &data.config, Vec::new()))
            .await?;

        Ok(())
    }

    fn summary_reply(
        result: &InventoryResult,
        config: &AppConfig,
        components: Vec<serenity::CreateActionRow>,
    ) -> poise::CreateReply {
        let presentation = &config.presentation;
        let name = result.display_name_or(&presentation.default_player_name);

        let embed = serenity::CreateEmbed::default()
            .color(SUMMARY_COLOR)
            .title(format!("Inventory of {name}"))
            .thumbnail(result.avatar_url_or(&presentation.default_avatar_url))
            .description(summary::total_line(
                result,
                &config.pricing.currency_label,
            ))
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} | {}",
                summary::counts_line(result),
                chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
            )));

        poise::CreateReply::default()
            .content(format!("Inventory of **{name}**"))
            .embed(embed)
            .components(components)
    }

    async fn send_detail(
        ctx: poise::Context<'_, BotData, Error>,
        press: &serenity::ComponentInteraction,
        view: DetailView,
        result: &InventoryResult,
    ) -> Result<()> {
        let embed = serenity::CreateEmbed::default()
            .title(view.title())
            .color(view.color())
            .description(view.render(result));

        press
            .create_response(
                ctx.serenity_context(),
                serenity::CreateInteractionResponse::Message(
                    serenity::CreateInteractionResponseMessage::new()
                        .embed(embed)
                        .ephemeral(true),
                ),
            )
            .await?;
        Ok(())
    }
}

pub use inner::*;
