//! Exchange rate lookup.

use crate::{
    core::steam::{ExchangeRateEntry, InventoryApi},
    errors::{Error, Result},
};

/// Fetches the exchange table and returns the buy rate of the entry at `index`.
///
/// # Errors
/// Any transport failure, or a table without a parsable `buy` at `index`. There is no
/// fallback rate; the whole lookup is aborted.
pub async fn fetch_exchange_rate<A: InventoryApi + ?Sized>(api: &A, index: usize) -> Result<f64> {
    let entries = api.exchange_rates().await?;
    let rate = buy_rate(&entries, index)?;
    if let Some(entry) = entries.get(index) {
        tracing::debug!(
            "Exchange rate {}/{}: {rate}",
            entry.ccy.as_deref().unwrap_or("?"),
            entry.base_ccy.as_deref().unwrap_or("?")
        );
    }
    Ok(rate)
}

/// Extracts the buy rate of the entry at `index`.
pub fn buy_rate(entries: &[ExchangeRateEntry], index: usize) -> Result<f64> {
    let entry = entries.get(index).ok_or_else(|| Error::ExchangeRate {
        message: format!("no entry at index {index} ({} entries)", entries.len()),
    })?;

    let raw = entry.buy.as_deref().ok_or_else(|| Error::ExchangeRate {
        message: format!("entry {index} has no buy rate"),
    })?;

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .ok_or_else(|| Error::ExchangeRate {
            message: format!("buy rate {raw:?} is not a positive number"),
        })
}
