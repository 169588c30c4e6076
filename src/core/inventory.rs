//! Inventory aggregation - profile, exchange rate, paginated inventory and prices.
//!
//! [`collect_inventory`] runs the whole lookup for one command invocation. State is kept in
//! an explicit [`InventoryAccumulator`] that each pagination step updates. It is turned into
//! an immutable [`InventoryResult`] at the end.
//!
//! Failures come in two kinds:
//! - profile, exchange rate and inventory page failures abort the lookup;
//! - a failed price lookup only drops that item, and unreachable item constants are logged.

use crate::{
    config::AppConfig,
    config::settings::PricingConfig,
    core::{
        arcana::{self, ArcanaCatalog},
        exchange,
        identity::resolve_steam_id,
        pricing,
        rate_limit::RateLimiter,
        steam::{InventoryApi, ItemDescription, ItemKey, PlayerSummary},
    },
    errors::Result,
};
use indexmap::IndexMap;
use tracing::{debug, info, instrument, warn};

/// An item with a known market price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    /// Market hash name
    pub name: String,
    /// Converted, rounded price
    pub price: f64,
    /// Price for display, e.g. `"102.50 UAH"`
    pub price_label: String,
}

/// Everything one inventory lookup produced.
#[derive(Debug, Clone, Default)]
pub struct InventoryResult {
    /// Full-size avatar URL, if the profile has one
    pub avatar_url: Option<String>,
    /// Display name, if the profile has one
    pub display_name: Option<String>,
    /// Sum of every priced item, in the local currency
    pub total_price: f64,
    /// Priced items in the order they were priced
    pub items: IndexMap<ItemKey, PricedItem>,
    /// Arcana lines, `"<name> (<hero>)"`
    pub arcana: Vec<String>,
    /// Immortal item names
    pub immortals: Vec<String>,
}

impl InventoryResult {
    /// Display name, or `default` when the profile had none.
    #[must_use]
    pub fn display_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.display_name.as_deref().unwrap_or(default)
    }

    /// Avatar URL, or `default` when the profile had none.
    #[must_use]
    pub fn avatar_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.avatar_url.as_deref().unwrap_or(default)
    }
}

/// Running state of an inventory lookup.
#[derive(Debug, Default)]
pub struct InventoryAccumulator {
    avatar_url: Option<String>,
    display_name: Option<String>,
    total_price: f64,
    items: IndexMap<ItemKey, PricedItem>,
    arcana: Vec<String>,
    immortals: Vec<String>,
}

impl InventoryAccumulator {
    /// Starts from the first player summary, if any.
    #[must_use]
    pub fn new(profile: Option<PlayerSummary>) -> Self {
        let profile = profile.unwrap_or_default();
        Self {
            avatar_url: profile.avatarfull,
            display_name: profile.personaname,
            ..Self::default()
        }
    }

    /// Records the arcana and immortal items among one page's descriptions.
    pub fn record_classes(
        &mut self,
        descriptions: &[ItemDescription],
        catalog: &ArcanaCatalog,
        unknown_hero: &str,
    ) {
        for desc in descriptions {
            if desc.is_arcana() {
                self.arcana
                    .push(catalog.describe(&desc.market_hash_name, unknown_hero));
            }
            if desc.is_immortal() {
                self.immortals.push(desc.market_hash_name.clone());
            }
        }
    }

    /// Adds a priced item to the total and the item map.
    pub fn record_price(&mut self, key: ItemKey, item: PricedItem) {
        self.total_price = pricing::round_to_cents(self.total_price + item.price);
        self.items.insert(key, item);
    }

    /// Whether an item class already has a price.
    #[must_use]
    pub fn is_priced(&self, key: &ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Number of items priced so far.
    #[must_use]
    pub fn priced_count(&self) -> usize {
        self.items.len()
    }

    /// Finishes the lookup.
    #[must_use]
    pub fn into_result(self) -> InventoryResult {
        InventoryResult {
            avatar_url: self.avatar_url,
            display_name: self.display_name,
            total_price: self.total_price,
            items: self.items,
            arcana: self.arcana,
            immortals: self.immortals,
        }
    }
}

/// Prices one item. `Ok(None)` when the market has no current listing.
pub async fn price_item<A: InventoryApi + ?Sized>(
    api: &A,
    desc: &ItemDescription,
    rate: f64,
    pricing_config: &PricingConfig,
) -> Result<Option<PricedItem>> {
    let overview = api.price_overview(&desc.market_hash_name).await?;
    let Some(lowest) = overview.lowest_price else {
        return Ok(None);
    };

    let usd = pricing::parse_usd_price(&lowest)?;
    let price = pricing::convert(usd, rate);
    Ok(Some(PricedItem {
        name: desc.market_hash_name.clone(),
        price,
        price_label: pricing::format_price_label(price, &pricing_config.currency_label),
    }))
}

/// Prices every sellable item on one page, waiting on `limiter` before each request.
///
/// A class that was already priced on an earlier page is counted once and not requested
/// again.
pub async fn price_page<A: InventoryApi + ?Sized>(
    api: &A,
    limiter: &mut RateLimiter,
    acc: &mut InventoryAccumulator,
    descriptions: &[ItemDescription],
    rate: f64,
    pricing_config: &PricingConfig,
) {
    for desc in descriptions.iter().filter(|d| d.is_sellable()) {
        let key = desc.key();
        if acc.is_priced(&key) {
            debug!("Already priced {} ({})", desc.market_hash_name, key.as_str());
            continue;
        }
        limiter.acquire().await;
        match price_item(api, desc, rate, pricing_config).await {
            Ok(Some(item)) => {
                debug!("Priced {} ({}): {}", item.name, key.as_str(), item.price_label);
                acc.record_price(key, item);
            }
            Ok(None) => debug!("No market listing for {}", desc.market_hash_name),
            Err(e) => warn!("Failed to get price for {}: {e}", desc.market_hash_name),
        }
    }
}

/// Looks up and prices the inventory of `input` (a SteamID64 or profile URL).
///
/// # Errors
/// Fails if the profile lookup, exchange rate or any inventory page request fails.
/// Individual price failures and unreachable item constants are logged and skipped.
#[instrument(skip(api, config))]
pub async fn collect_inventory<A: InventoryApi + ?Sized>(
    api: &A,
    config: &AppConfig,
    input: &str,
) -> Result<InventoryResult> {
    let steam_id = resolve_steam_id(input);
    info!("Collecting inventory for {steam_id}");

    let players = api.player_summaries(&steam_id).await?;
    if players.is_empty() {
        warn!("No player summary for {steam_id}");
    }
    let mut acc = InventoryAccumulator::new(players.into_iter().next());

    let rate = exchange::fetch_exchange_rate(api, config.pricing.exchange_rate_index).await?;
    let catalog = arcana::fetch_arcana_catalog(api, &config.arcana).await;
    let mut limiter = RateLimiter::new(config.pricing.request_interval());

    let mut cursor: Option<String> = None;
    let mut pages = 0_usize;
    loop {
        let page = api
            .inventory_page(&steam_id, cursor.as_deref())
            .await?
            .unwrap_or_default();

        if page.assets.is_none() {
            break;
        }
        pages += 1;
        debug!(
            "Page {pages}: {} descriptions (more: {})",
            page.descriptions.len(),
            page.more_items
        );

        acc.record_classes(
            &page.descriptions,
            &catalog,
            &config.presentation.unknown_hero,
        );
        price_page(
            api,
            &mut limiter,
            &mut acc,
            &page.descriptions,
            rate,
            &config.pricing,
        )
        .await;

        if !page.more_items {
            break;
        }
        match page.last_assetid {
            Some(next) => cursor = Some(next),
            None => {
                warn!("Inventory page claims more items but has no cursor; stopping");
                break;
            }
        }
    }

    info!(
        "Inventory for {steam_id}: {pages} pages, {} priced items",
        acc.priced_count()
    );
    Ok(acc.into_result())
}
