//! Text for the summary and detail views of an inventory result.
//!
//! Everything here is plain strings so it can be tested without Discord. The bot layer wraps
//! the text in embeds.

use crate::core::inventory::InventoryResult;

/// Discord's limit on embed description length, in characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// The three filtered views behind the summary buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    /// Every priced item with its price
    Prices,
    /// Arcana items with their heroes
    Arcana,
    /// Immortal items
    Immortals,
}

impl DetailView {
    /// All views in button order.
    pub const ALL: [Self; 3] = [Self::Prices, Self::Arcana, Self::Immortals];

    /// Stable identifier used in button custom ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Prices => "price",
            Self::Arcana => "arcana",
            Self::Immortals => "immortal",
        }
    }

    /// Inverse of [`DetailView::slug`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.slug() == slug)
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prices => "📊 Price",
            Self::Arcana => "🌀 Arcana",
            Self::Immortals => "🌟 Immortal",
        }
    }

    /// Title of the detail embed.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Prices => "📊 Inventory prices",
            Self::Arcana => "🌀 Arcana items",
            Self::Immortals => "🌟 Immortal items",
        }
    }

    /// Accent color of the detail embed.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Prices => 0x0000_FFFF,
            Self::Arcana => 0x00FF_00FF,
            Self::Immortals => 0x00FF_D700,
        }
    }

    /// Description text of the detail embed.
    #[must_use]
    pub fn render(self, result: &InventoryResult) -> String {
        match self {
            Self::Prices => {
                let lines: Vec<String> = result
                    .items
                    .values()
                    .map(|item| format!("**{}**: {}", item.name, item.price_label))
                    .collect();
                fit_lines(&lines, "No items available")
            }
            Self::Arcana => fit_lines(&result.arcana, "No Arcana items"),
            Self::Immortals => fit_lines(&result.immortals, "No Immortal items"),
        }
    }
}

/// Summary line shown in the main embed.
#[must_use]
pub fn total_line(result: &InventoryResult, currency_label: &str) -> String {
    format!(
        "Total inventory value: **{:.2} {currency_label}**",
        result.total_price
    )
}

/// Footer with counts for the main embed.
#[must_use]
pub fn counts_line(result: &InventoryResult) -> String {
    format!(
        "{} priced item{} | {} arcana | {} immortal",
        result.items.len(),
        if result.items.len() == 1 { "" } else { "s" },
        result.arcana.len(),
        result.immortals.len()
    )
}

/// Joins `lines` with newlines, or returns `empty` if there are none.
///
/// Output stays within [`EMBED_DESCRIPTION_LIMIT`]; lines that do not fit are replaced by a
/// final `…and N more` line.
#[must_use]
pub fn fit_lines(lines: &[String], empty: &str) -> String {
    if lines.is_empty() {
        return empty.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for (shown, line) in lines.iter().enumerate() {
        let remaining = lines.len() - shown;
        let tail = format!("\n…and {remaining} more");
        let separator = usize::from(shown > 0);
        let cost = separator + line.chars().count();

        // Leave room for the tail unless this is the final line.
        let reserve = if remaining > 1 { tail.chars().count() } else { 0 };
        if used + cost + reserve > EMBED_DESCRIPTION_LIMIT {
            if shown == 0 {
                return format!("…and {remaining} more");
            }
            out.push_str(&tail);
            return out;
        }

        if separator == 1 {
            out.push('\n');
        }
        out.push_str(line);
        used += cost;
    }
    out
}

/// Plain-text rendering of a full result, used in logs.
#[must_use]
pub fn plain_summary(result: &InventoryResult, currency_label: &str) -> String {
    format!(
        "{:.2} {currency_label} across {} priced items, {} arcana, {} immortal",
        result.total_price,
        result.items.len(),
        result.arcana.len(),
        result.immortals.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::{InventoryAccumulator, PricedItem};
    use crate::test_utils::description;

    fn sample_result() -> InventoryResult {
        let mut acc = InventoryAccumulator::new(None);
        acc.record_price(
            description("1", "Golden Hat", "Rare", true).key(),
            PricedItem {
                name: "Golden Hat".to_string(),
                price: 102.5,
                price_label: "102.50 UAH".to_string(),
            },
        );
        acc.into_result()
    }

    #[test]
    fn test_slug_round_trip() {
        for view in DetailView::ALL {
            assert_eq!(DetailView::from_slug(view.slug()), Some(view));
        }
        assert_eq!(DetailView::from_slug("bogus"), None);
    }

    #[test]
    fn test_price_view_lists_items() {
        let text = DetailView::Prices.render(&sample_result());
        assert_eq!(text, "**Golden Hat**: 102.50 UAH");
    }

    #[test]
    fn test_empty_views_use_placeholders() {
        let result = InventoryResult::default();
        assert_eq!(DetailView::Prices.render(&result), "No items available");
        assert_eq!(DetailView::Arcana.render(&result), "No Arcana items");
        assert_eq!(DetailView::Immortals.render(&result), "No Immortal items");
    }

    #[test]
    fn test_total_line_has_two_decimals() {
        let result = InventoryResult {
            total_price: 164.0,
            ..InventoryResult::default()
        };
        assert_eq!(
            total_line(&result, "UAH"),
            "Total inventory value: **164.00 UAH**"
        );
    }

    #[test]
    fn test_counts_line_pluralizes() {
        assert_eq!(
            counts_line(&sample_result()),
            "1 priced item | 0 arcana | 0 immortal"
        );
    }

    #[test]
    fn test_long_lists_are_truncated() {
        let lines: Vec<String> = (0..1000).map(|i| format!("Immortal item number {i}")).collect();
        let text = fit_lines(&lines, "none");

        assert!(text.chars().count() <= EMBED_DESCRIPTION_LIMIT);
        assert!(text.starts_with("Immortal item number 0\n"));
        assert!(text.contains("more"));
        assert!(text.lines().last().unwrap_or_default().starts_with("…and "));
    }

    #[test]
    fn test_lists_that_fit_are_untouched() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(fit_lines(&lines, "none"), "a\nb");
    }

    #[test]
    fn test_plain_summary() {
        assert_eq!(
            plain_summary(&sample_result(), "UAH"),
            "102.50 UAH across 1 priced items, 0 arcana, 0 immortal"
        );
    }
}
