//! Upstream API seam and wire types.
//!
//! [`InventoryApi`] covers every external call an inventory lookup makes: player summary,
//! exchange rate, item constants, inventory pages and market prices. The bot uses the
//! reqwest-backed [`crate::core::client::HttpInventoryApi`]; tests substitute an in-memory fake.

use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// Everything the inventory pipeline needs from the outside world.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Player summaries for one identifier. Empty when the profile does not exist or the
    /// response could not be understood.
    async fn player_summaries(&self, steam_id: &str) -> Result<Vec<PlayerSummary>>;

    /// Current exchange rate table.
    async fn exchange_rates(&self) -> Result<Vec<ExchangeRateEntry>>;

    /// Game item constants. Only reachability matters to callers.
    async fn item_constants(&self) -> Result<serde_json::Value>;

    /// One inventory page. `None` when the endpoint answered with a JSON `null`.
    async fn inventory_page(
        &self,
        steam_id: &str,
        start_assetid: Option<&str>,
    ) -> Result<Option<InventoryPage>>;

    /// Market price overview for one item by market hash name.
    async fn price_overview(&self, market_hash_name: &str) -> Result<PriceOverview>;
}

/// `GetPlayerSummaries` response envelope
#[derive(Debug, Default, Deserialize)]
pub struct PlayerSummariesResponse {
    /// Wrapper object
    #[serde(default)]
    pub response: PlayerList,
}

/// List of players inside the summaries response
#[derive(Debug, Default, Deserialize)]
pub struct PlayerList {
    /// Matching players, at most one per requested id
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// The parts of a Steam player summary the bot shows
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSummary {
    /// Full-size avatar URL
    pub avatarfull: Option<String>,
    /// Display name
    pub personaname: Option<String>,
}

/// One row of the PrivatBank exchange table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeRateEntry {
    /// Currency code, e.g. `USD`
    pub ccy: Option<String>,
    /// Base currency code, e.g. `UAH`
    pub base_ccy: Option<String>,
    /// Bank buy rate as a decimal string
    pub buy: Option<String>,
}

/// One page of a Steam Community inventory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryPage {
    /// Assets on this page; absent for empty or unavailable inventories. Only their
    /// presence matters, pricing works on the descriptions.
    pub assets: Option<Vec<IgnoredAny>>,
    /// Item class descriptions referenced by the assets
    #[serde(default)]
    pub descriptions: Vec<ItemDescription>,
    /// Whether another page follows
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub more_items: bool,
    /// Cursor for the next page
    pub last_assetid: Option<String>,
}

/// Description of an item class as returned by the inventory endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDescription {
    /// Item class id
    #[serde(default)]
    pub classid: String,
    /// Item instance id (`"0"` for plain items)
    #[serde(default)]
    pub instanceid: String,
    /// Canonical market name, used for price lookups and display
    #[serde(default)]
    pub market_hash_name: String,
    /// Localized type line, e.g. `"Arcana Wearable"`
    #[serde(rename = "type", default)]
    pub item_type: String,
    /// Can be traded
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub tradable: bool,
    /// Can be listed on the community market
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub marketable: bool,
}

impl ItemDescription {
    /// Key that identifies this item class across every inventory page.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey(format!("{}_{}", self.classid, self.instanceid))
    }

    /// Tradable and marketable, so the market has a price for it.
    #[must_use]
    pub const fn is_sellable(&self) -> bool {
        self.tradable && self.marketable
    }

    /// Type line marks the item as an arcana.
    #[must_use]
    pub fn is_arcana(&self) -> bool {
        self.item_type.contains("Arcana")
    }

    /// Type line marks the item as an immortal.
    #[must_use]
    pub fn is_immortal(&self) -> bool {
        self.item_type.contains("Immortal")
    }
}

/// Globally unique key of a priced item (`<classid>_<instanceid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey(String);

impl ItemKey {
    /// Key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Market `priceoverview` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceOverview {
    /// Lowest current listing, e.g. `"$2.50"`
    pub lowest_price: Option<String>,
}

/// Steam encodes flags as `0`/`1`, sometimes as booleans or strings.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
        Some(Flag::Text(value)) => !value.is_empty() && value != "0",
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_inventory_page_parses_steam_shape() {
        let json = r#"{
            "assets": [{"appid": 570, "contextid": "2", "assetid": "111", "classid": "10", "instanceid": "0", "amount": "1"}],
            "descriptions": [{
                "appid": 570, "classid": "10", "instanceid": "0",
                "market_hash_name": "Manifold Paradox",
                "type": "Arcana Wearable",
                "tradable": 1, "marketable": 1
            }],
            "more_items": 1,
            "last_assetid": "111",
            "total_inventory_count": 200,
            "success": 1
        }"#;

        let page: InventoryPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.assets.as_ref().unwrap().len(), 1);
        assert!(page.more_items);
        assert_eq!(page.last_assetid.as_deref(), Some("111"));

        let desc = &page.descriptions[0];
        assert!(desc.is_sellable());
        assert!(desc.is_arcana());
        assert!(!desc.is_immortal());
        assert_eq!(desc.key().as_str(), "10_0");
    }

    #[test]
    fn test_empty_inventory_has_no_assets() {
        let page: InventoryPage =
            serde_json::from_str(r#"{"total_inventory_count": 0, "success": 1}"#).unwrap();
        assert!(page.assets.is_none());
        assert!(page.descriptions.is_empty());
        assert!(!page.more_items);
    }

    #[test]
    fn test_flags_accept_bools_and_zero() {
        let desc: ItemDescription = serde_json::from_str(
            r#"{"classid": "1", "instanceid": "2", "market_hash_name": "x", "type": "Immortal", "tradable": true, "marketable": 0}"#,
        )
        .unwrap();
        assert!(desc.tradable);
        assert!(!desc.marketable);
        assert!(!desc.is_sellable());
        assert!(desc.is_immortal());
    }

    #[test]
    fn test_player_summaries_tolerate_missing_players() {
        let parsed: PlayerSummariesResponse = serde_json::from_str(r#"{"response": {}}"#).unwrap();
        assert!(parsed.response.players.is_empty());
    }
}
