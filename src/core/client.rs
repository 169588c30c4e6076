//! HTTP implementation of [`InventoryApi`] on top of `reqwest`.

use crate::{
    config::AppConfig,
    config::settings::{EndpointConfig, PricingConfig, SteamConfig},
    core::steam::{
        ExchangeRateEntry, InventoryApi, InventoryPage, PlayerSummariesResponse, PlayerSummary,
        PriceOverview,
    },
    errors::Result,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("inventory-buddy/", env!("CARGO_PKG_VERSION"));

/// Talks to the Steam Web API, Steam Community, PrivatBank and OpenDota.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    api_key: String,
    endpoints: EndpointConfig,
    steam: SteamConfig,
    pricing: PricingConfig,
}

impl HttpInventoryApi {
    /// Builds the client with a request timeout and the configured endpoints.
    ///
    /// # Errors
    /// Returns `Error::Http` if the underlying HTTP client cannot be constructed.
    pub fn new(api_key: String, config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoints: config.endpoints.clone(),
            steam: config.steam.clone(),
            pricing: config.pricing.clone(),
        })
    }
}

/// Sends `request` and returns the body of a successful response.
///
/// The URL is stripped from any error, so query parameters like the API key never reach
/// the logs.
async fn fetch_text(request: RequestBuilder) -> Result<String> {
    let body = request
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(reqwest::Error::without_url)?
        .text()
        .await
        .map_err(reqwest::Error::without_url)?;
    Ok(body)
}

/// Players in a `GetPlayerSummaries` body. A body of the wrong shape yields no players.
#[must_use]
pub fn parse_player_summaries(steam_id: &str, body: &str) -> Vec<PlayerSummary> {
    match serde_json::from_str::<PlayerSummariesResponse>(body) {
        Ok(parsed) => parsed.response.players,
        Err(e) => {
            warn!("Unexpected player summary response for {steam_id}: {e}");
            Vec::new()
        }
    }
}

/// One inventory page. The endpoint answers a JSON `null` for private or missing
/// inventories, which becomes `None`.
///
/// # Errors
/// Returns `Error::Json` if the body is neither `null` nor an inventory page.
pub fn parse_inventory_page(body: &str) -> Result<Option<InventoryPage>> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn player_summaries(&self, steam_id: &str) -> Result<Vec<PlayerSummary>> {
        let url = format!(
            "{}/ISteamUser/GetPlayerSummaries/v0002/",
            self.endpoints.steam_api_base
        );
        let request = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("steamids", steam_id)]);

        let body = fetch_text(request).await?;
        Ok(parse_player_summaries(steam_id, &body))
    }

    async fn exchange_rates(&self) -> Result<Vec<ExchangeRateEntry>> {
        let rates = self
            .client
            .get(&self.endpoints.exchange_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rates)
    }

    async fn item_constants(&self) -> Result<serde_json::Value> {
        let constants = self
            .client
            .get(&self.endpoints.constants_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(constants)
    }

    async fn inventory_page(
        &self,
        steam_id: &str,
        start_assetid: Option<&str>,
    ) -> Result<Option<InventoryPage>> {
        let url = format!(
            "{}/inventory/{}/{}/{}",
            self.endpoints.community_base, steam_id, self.steam.app_id, self.steam.context_id
        );
        let mut request = self.client.get(&url).query(&[
            ("l", self.steam.language.clone()),
            ("count", self.steam.page_size.to_string()),
        ]);
        if let Some(cursor) = start_assetid {
            request = request.query(&[("start_assetid", cursor)]);
        }

        debug!("Fetching inventory page for {steam_id} (cursor: {start_assetid:?})");
        let body = fetch_text(request).await?;
        parse_inventory_page(&body)
    }

    async fn price_overview(&self, market_hash_name: &str) -> Result<PriceOverview> {
        let url = format!("{}/market/priceoverview/", self.endpoints.community_base);
        let overview = self
            .client
            .get(&url)
            .query(&[
                ("appid", self.steam.app_id.to_string()),
                ("currency", self.pricing.currency_code.to_string()),
                ("market_hash_name", market_hash_name.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(overview)
    }
}
