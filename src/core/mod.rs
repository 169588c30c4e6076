//! Core business logic - framework-agnostic inventory lookup and pricing.
//!
//! Nothing in here knows about Discord. The bot layer calls
//! [`inventory::collect_inventory`] and renders the result with [`summary`].

/// Arcana-to-hero catalog
pub mod arcana;
/// reqwest-backed upstream API client
pub mod client;
/// Exchange rate extraction
pub mod exchange;
/// SteamID / profile URL resolution
pub mod identity;
/// Inventory pagination, pricing and aggregation
pub mod inventory;
/// Price parsing and currency conversion
pub mod pricing;
/// Interval rate limiter for price lookups
pub mod rate_limit;
/// Upstream API trait and wire types
pub mod steam;
/// Text rendering of results
pub mod summary;
