//! Shared test utilities for `InventoryBuddy`.
//!
//! This module provides an in-memory [`InventoryApi`] with scripted responses, plus helpers
//! for building the wire types with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    config::AppConfig,
    core::steam::{
        ExchangeRateEntry, InventoryApi, InventoryPage, ItemDescription, PlayerSummary,
        PriceOverview,
    },
    errors::{Error, Result},
};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted stand-in for the upstream APIs.
///
/// Pages are served in order, one per request. Prices are looked up by market hash name;
/// a name with no scripted price makes the request fail.
#[derive(Debug, Default)]
pub struct FakeApi {
    players: Vec<PlayerSummary>,
    rates: Vec<ExchangeRateEntry>,
    pages: Vec<InventoryPage>,
    prices: HashMap<String, Option<String>>,
    constants_fail: bool,
    inventory_fail: bool,
    inventory_null: bool,
    requested_ids: Mutex<Vec<String>>,
    requested_cursors: Mutex<Vec<Option<String>>>,
    price_requests: Mutex<Vec<String>>,
}

impl FakeApi {
    /// Empty fake: no players, no rates, no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange table whose index 1 (USD) buys at `buy`.
    pub fn with_rate(mut self, buy: &str) -> Self {
        self.rates = rate_table(buy);
        self
    }

    /// Adds a player to the summaries response.
    pub fn with_player(mut self, player: PlayerSummary) -> Self {
        self.players.push(player);
        self
    }

    /// Queues an inventory page.
    pub fn with_page(mut self, page: InventoryPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Scripts the lowest market price of an item.
    pub fn with_price(mut self, name: &str, lowest: &str) -> Self {
        self.prices
            .insert(name.to_string(), Some(lowest.to_string()));
        self
    }

    /// Scripts an item that has no market listing.
    pub fn with_unlisted(mut self, name: &str) -> Self {
        self.prices.insert(name.to_string(), None);
        self
    }

    /// Makes the item constants request fail.
    pub fn failing_constants(mut self) -> Self {
        self.constants_fail = true;
        self
    }

    /// Makes every inventory page request fail.
    pub fn failing_inventory(mut self) -> Self {
        self.inventory_fail = true;
        self
    }

    /// Makes the inventory endpoint answer with a JSON `null`.
    pub fn null_inventory(mut self) -> Self {
        self.inventory_null = true;
        self
    }

    /// Identifiers passed to the profile and inventory endpoints, in order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    /// Cursors passed to the inventory endpoint, in order.
    pub fn requested_cursors(&self) -> Vec<Option<String>> {
        self.requested_cursors.lock().unwrap().clone()
    }

    /// Items whose price was requested, in order.
    pub fn price_requests(&self) -> Vec<String> {
        self.price_requests.lock().unwrap().clone()
    }
}

/// A JSON decode error standing in for any upstream failure.
fn upstream_failure() -> Error {
    Error::Json(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
}

#[async_trait]
impl InventoryApi for FakeApi {
    async fn player_summaries(&self, steam_id: &str) -> Result<Vec<PlayerSummary>> {
        self.requested_ids
            .lock()
            .unwrap()
            .push(steam_id.to_string());
        Ok(self.players.clone())
    }

    async fn exchange_rates(&self) -> Result<Vec<ExchangeRateEntry>> {
        Ok(self.rates.clone())
    }

    async fn item_constants(&self) -> Result<serde_json::Value> {
        if self.constants_fail {
            return Err(upstream_failure());
        }
        Ok(serde_json::json!({ "blink": { "id": 1 } }))
    }

    async fn inventory_page(
        &self,
        steam_id: &str,
        start_assetid: Option<&str>,
    ) -> Result<Option<InventoryPage>> {
        if self.inventory_fail {
            return Err(upstream_failure());
        }
        self.requested_ids
            .lock()
            .unwrap()
            .push(steam_id.to_string());

        let mut cursors = self.requested_cursors.lock().unwrap();
        let index = cursors.len();
        cursors.push(start_assetid.map(str::to_string));

        if self.inventory_null {
            return Ok(None);
        }
        // Past the scripted pages the inventory looks empty.
        Ok(Some(self.pages.get(index).cloned().unwrap_or_default()))
    }

    async fn price_overview(&self, market_hash_name: &str) -> Result<PriceOverview> {
        self.price_requests
            .lock()
            .unwrap()
            .push(market_hash_name.to_string());

        match self.prices.get(market_hash_name) {
            Some(lowest) => Ok(PriceOverview {
                lowest_price: lowest.clone(),
            }),
            None => Err(upstream_failure()),
        }
    }
}

/// Default configuration, as if no config.toml existed.
pub fn test_config() -> AppConfig {
    AppConfig::default()
}

/// PrivatBank-shaped table: EUR at index 0, USD at index 1.
pub fn rate_table(usd_buy: &str) -> Vec<ExchangeRateEntry> {
    vec![
        ExchangeRateEntry {
            ccy: Some("EUR".to_string()),
            base_ccy: Some("UAH".to_string()),
            buy: Some("44.50".to_string()),
        },
        ExchangeRateEntry {
            ccy: Some("USD".to_string()),
            base_ccy: Some("UAH".to_string()),
            buy: Some(usd_buy.to_string()),
        },
    ]
}

/// Player summary with a name and avatar.
pub fn player(name: &str, avatar: &str) -> PlayerSummary {
    PlayerSummary {
        avatarfull: Some(avatar.to_string()),
        personaname: Some(name.to_string()),
    }
}

/// Item description with instance id `0`.
///
/// # Arguments
/// * `classid` - Class id, which also makes the item key unique
/// * `name` - Market hash name
/// * `item_type` - Type line, e.g. `"Arcana Wearable"`
/// * `sellable` - Sets both `tradable` and `marketable`
pub fn description(classid: &str, name: &str, item_type: &str, sellable: bool) -> ItemDescription {
    ItemDescription {
        classid: classid.to_string(),
        instanceid: "0".to_string(),
        market_hash_name: name.to_string(),
        item_type: item_type.to_string(),
        tradable: sellable,
        marketable: sellable,
    }
}

/// Inventory page with one asset per description.
pub fn page(
    descriptions: Vec<ItemDescription>,
    more_items: bool,
    last_assetid: Option<&str>,
) -> InventoryPage {
    InventoryPage {
        assets: Some(vec![IgnoredAny; descriptions.len()]),
        descriptions,
        more_items,
        last_assetid: last_assetid.map(str::to_string),
    }
}
