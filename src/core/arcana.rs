//! Arcana catalog - which hero each arcana belongs to.

use crate::core::steam::InventoryApi;
use std::collections::HashMap;

/// Arcanas known out of the box, by market hash name.
const BUILTIN_ARCANAS: &[(&str, &str)] = &[
    ("Fiery Soul of the Slayer", "Lina"),
    ("Fractal Horns of Inner Abysm", "Terrorblade"),
    ("Manifold Paradox", "Phantom Assassin"),
    ("Demon Eater", "Shadow Fiend"),
    ("Inscribed Blades of Voth Domosh", "Legion Commander"),
    ("Frost Avalanche", "Crystal Maiden"),
    ("Tempest Helm of the Thundergod", "Zeus"),
    ("Great Sage's Reckoning", "Monkey King"),
    ("Bladeform Legacy", "Juggernaut"),
    ("Feast of Abscession", "Pudge"),
    ("The Magus Cypher", "Rubick"),
    ("Planetfall", "Earthshaker"),
    ("Flockheart's Gamble", "Ogre Magi"),
    ("The One True King", "Wraith King"),
    ("The Eminence of Ristul", "Queen of Pain"),
    ("Compass of the Rising Gale", "Windranger"),
    ("Phantom Advent", "Spectre"),
    ("Dread Retribution", "Drow Ranger"),
    ("Claszian Apostasy", "Faceless Void"),
    ("Voidstorm Asylum", "Razor"),
    ("Inscribed Swine of the Sunken Galley", "Techies"),
];

/// Read-only mapping from arcana name to hero name.
#[derive(Debug, Clone)]
pub struct ArcanaCatalog {
    heroes: HashMap<String, String>,
}

impl ArcanaCatalog {
    /// Catalog with only the built-in arcanas.
    #[must_use]
    pub fn builtin() -> Self {
        let heroes = BUILTIN_ARCANAS
            .iter()
            .map(|&(name, hero)| (name.to_string(), hero.to_string()))
            .collect();
        Self { heroes }
    }

    /// Built-in arcanas plus `extra`; entries in `extra` win on conflict.
    #[must_use]
    pub fn with_overrides(extra: &HashMap<String, String>) -> Self {
        let mut catalog = Self::builtin();
        catalog
            .heroes
            .extend(extra.iter().map(|(name, hero)| (name.clone(), hero.clone())));
        catalog
    }

    /// Hero for an arcana, if known.
    #[must_use]
    pub fn hero_for(&self, market_hash_name: &str) -> Option<&str> {
        self.heroes.get(market_hash_name).map(String::as_str)
    }

    /// Display line `"<name> (<hero>)"`, using `unknown_hero` when the name is not cataloged.
    #[must_use]
    pub fn describe(&self, market_hash_name: &str, unknown_hero: &str) -> String {
        let hero = self.hero_for(market_hash_name).unwrap_or(unknown_hero);
        format!("{market_hash_name} ({hero})")
    }
}

/// Builds the catalog for one inventory lookup.
///
/// The item constants endpoint is contacted first. Its body is not used, so an unreachable
/// endpoint is only logged. The catalog comes from the built-in table and `extra`.
pub async fn fetch_arcana_catalog<A: InventoryApi + ?Sized>(
    api: &A,
    extra: &HashMap<String, String>,
) -> ArcanaCatalog {
    let catalog = ArcanaCatalog::with_overrides(extra);
    match api.item_constants().await {
        Ok(constants) => tracing::debug!(
            "Item constants reachable ({} entries), {} arcanas cataloged",
            constants.as_object().map_or(0, serde_json::Map::len),
            catalog.heroes.len()
        ),
        Err(e) => tracing::warn!(
            "Item constants unreachable, using {} cataloged arcanas: {e}",
            catalog.heroes.len()
        ),
    }
    catalog
}
