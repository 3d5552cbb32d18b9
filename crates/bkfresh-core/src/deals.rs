use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel `expires_in` value marking an everyday (non-sale) price.
pub const EVERYDAY_EXPIRY: &str = "Always";

/// Sale story the storefronts attach to non-sale items; not worth showing.
const EVERYDAY_SALE_STORY: &str = "Everyday low price";

const DEFAULT_DEAL_ICON: &str = "🛒";

/// Categories the curated feeds use, in display order.
pub const DEAL_CATEGORIES: [&str; 4] = ["Protein", "Produce", "Staples", "Dairy"];

/// A weekly deal or everyday price at a store.
///
/// Every price field is a preformatted display string (`"$0.79/lb"`) and is
/// never parsed back into a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Free-text store name; not a reference into the store directory.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub store: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub item: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub original_price: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    /// Relative duration (`"5 days"`) or [`EVERYDAY_EXPIRY`].
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expires_in: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    /// Feed the deal came from, e.g. `"flipp"` or `"whole_foods"`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sale_story: Option<String>,
}

/// Short retailer badge shown next to deals from dedicated feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceBadge {
    #[serde(rename = "TJ's")]
    TraderJoes,
    #[serde(rename = "WF")]
    WholeFoods,
}

impl SourceBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SourceBadge::TraderJoes => "TJ's",
            SourceBadge::WholeFoods => "WF",
        }
    }
}

impl Deal {
    /// Build a deal from a row of named text fields, as produced by a
    /// spreadsheet export. Blank optional fields become `None`.
    pub fn from_fields<'a, F>(field: F) -> Self
    where
        F: Fn(&str) -> &'a str,
    {
        let optional = |name: &str| Some(field(name).trim().to_string()).filter(|s| !s.is_empty());
        Self {
            store: field("store").to_string(),
            item: field("item").to_string(),
            price: field("price").to_string(),
            original_price: optional("original_price"),
            category: field("category").to_string(),
            expires_in: field("expires_in").to_string(),
            icon: optional("icon"),
            source: optional("source"),
            sale_story: optional("sale_story"),
        }
    }

    /// `true` when an original price is present and differs from the current one.
    #[must_use]
    pub fn has_savings(&self) -> bool {
        self.original_price
            .as_deref()
            .is_some_and(|orig| !orig.is_empty() && orig != self.price)
    }

    #[must_use]
    pub fn is_everyday(&self) -> bool {
        self.expires_in == EVERYDAY_EXPIRY
    }

    /// Human-readable expiry, or `None` when the feed gave no expiry.
    #[must_use]
    pub fn expiry_label(&self) -> Option<String> {
        if self.expires_in.is_empty() {
            None
        } else if self.is_everyday() {
            Some("Everyday price".to_string())
        } else {
            Some(format!("Expires: {}", self.expires_in))
        }
    }

    /// The sale story, unless it is the generic everyday-price blurb.
    #[must_use]
    pub fn visible_sale_story(&self) -> Option<&str> {
        self.sale_story
            .as_deref()
            .filter(|story| !story.is_empty() && *story != EVERYDAY_SALE_STORY)
    }

    /// The deal's own icon, else the category glyph, else a cart.
    #[must_use]
    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .or_else(|| icon_for_category(&self.category))
            .unwrap_or(DEFAULT_DEAL_ICON)
    }

    #[must_use]
    pub fn source_badge(&self) -> Option<SourceBadge> {
        match self.source.as_deref()? {
            "trader_joes" | "trader_joes_curated" => Some(SourceBadge::TraderJoes),
            "whole_foods" => Some(SourceBadge::WholeFoods),
            _ => None,
        }
    }
}

/// Default glyph for a deal category.
#[must_use]
pub fn icon_for_category(category: &str) -> Option<&'static str> {
    match category {
        "Protein" => Some("🍗"),
        "Produce" => Some("🥬"),
        "Staples" => Some("🍚"),
        "Dairy" => Some("🥛"),
        _ => None,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Sample deals shown until (and unless) a live source resolves.
#[must_use]
pub fn fallback_deals() -> &'static [Deal] {
    &FALLBACK_DEALS
}

#[allow(clippy::too_many_arguments)]
fn deal(
    store: &str,
    item: &str,
    price: &str,
    original_price: &str,
    category: &str,
    expires_in: &str,
    icon: &str,
    source: &str,
) -> Deal {
    let owned = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
    Deal {
        store: store.to_string(),
        item: item.to_string(),
        price: price.to_string(),
        original_price: owned(original_price),
        category: category.to_string(),
        expires_in: expires_in.to_string(),
        icon: owned(icon),
        source: owned(source),
        sale_story: None,
    }
}

static FALLBACK_DEALS: LazyLock<Vec<Deal>> = LazyLock::new(|| {
    vec![
        deal("Food Bazaar", "Chicken Leg Quarters", "$0.79/lb", "$1.29/lb", "Protein", "5 days", "🍗", "flipp"),
        deal("ALDI", "Long Grain White Rice (5lb)", "$2.99", "$4.49", "Staples", "5 days", "🍚", "flipp"),
        deal("Key Food", "Black Beans (15oz can)", "$0.69", "$1.19", "Staples", "5 days", "🫘", "flipp"),
        deal("Trader Joe's", "Frozen Stir-Fry Vegetables", "$1.99", "", "Produce", "Always", "🥦", "trader_joes"),
        deal("Food Bazaar", "Bananas", "$0.39/lb", "$0.59/lb", "Produce", "5 days", "🍌", "flipp"),
        deal("Lidl", "Eggs (Dozen, Large)", "$2.49", "$3.99", "Dairy", "5 days", "🥚", "flipp"),
        deal("ALDI", "Pasta (1lb box)", "$0.89", "$1.29", "Staples", "5 days", "🍝", "flipp"),
        deal("Bravo", "Green Plantains", "$0.49/each", "$0.79/each", "Produce", "5 days", "🍌", "flipp"),
        deal("Whole Foods", "365 Organic Canned Tomatoes", "$1.49", "$1.99", "Staples", "This week", "🍅", "whole_foods"),
        deal("Trader Joe's", "Peanut Butter (16oz)", "$2.49", "", "Staples", "Always", "🥜", "trader_joes"),
    ]
});
