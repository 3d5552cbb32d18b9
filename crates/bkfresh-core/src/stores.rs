use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Relative price level of a store, ordered cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Mid,
    #[serde(rename = "$$$")]
    High,
}

impl PriceTier {
    pub const ALL: [PriceTier; 3] = [PriceTier::Low, PriceTier::Mid, PriceTier::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Low => "$",
            PriceTier::Mid => "$$",
            PriceTier::High => "$$$",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "$" => Ok(PriceTier::Low),
            "$$" => Ok(PriceTier::Mid),
            "$$$" => Ok(PriceTier::High),
            other => Err(CoreError::InvalidPriceTier(other.to_string())),
        }
    }
}

/// A neighborhood grocery store. Reference data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    /// Display label such as `"0.3 mi"`; never computed.
    pub distance: String,
    pub snap_ebt: bool,
    pub hours: String,
    pub price_level: PriceTier,
    pub tags: Vec<String>,
    pub description: String,
}

/// Look up a built-in store by id.
#[must_use]
pub fn find_store(id: u32) -> Option<&'static Store> {
    builtin_stores().iter().find(|s| s.id == id)
}

/// The compiled-in store directory, in display order.
#[must_use]
pub fn builtin_stores() -> &'static [Store] {
    &STORES
}

#[allow(clippy::too_many_arguments)]
fn store(
    id: u32,
    name: &str,
    address: &str,
    neighborhood: &str,
    distance: &str,
    hours: &str,
    price_level: PriceTier,
    tags: &[&str],
    description: &str,
) -> Store {
    Store {
        id,
        name: name.to_string(),
        address: address.to_string(),
        neighborhood: neighborhood.to_string(),
        distance: distance.to_string(),
        snap_ebt: true,
        hours: hours.to_string(),
        price_level,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        description: description.to_string(),
    }
}

static STORES: LazyLock<Vec<Store>> = LazyLock::new(|| {
    vec![
        store(
            1,
            "Food Bazaar Supermarket",
            "445 Gold St, Brooklyn, NY 11201",
            "Downtown Brooklyn",
            "0.3 mi",
            "7AM – 10PM",
            PriceTier::Low,
            &["International", "Fresh Produce", "Bulk"],
            "Large supermarket with diverse international products at very affordable prices.",
        ),
        store(
            2,
            "Key Food - Myrtle Ave",
            "492 Myrtle Ave, Brooklyn, NY 11205",
            "Fort Greene",
            "0.6 mi",
            "7AM – 11PM",
            PriceTier::Low,
            &["Store Brand", "Weekly Specials"],
            "Reliable neighborhood grocer with affordable Urban Meadow store brand.",
        ),
        store(
            3,
            "Trader Joe's - City Point",
            "445 Albee Square W, Brooklyn, NY 11201",
            "Downtown Brooklyn",
            "0.2 mi",
            "8AM – 9PM",
            PriceTier::Mid,
            &["Private Label", "Prepared Foods"],
            "Great for affordable staples like rice, pasta, frozen meals, and snacks.",
        ),
        store(
            4,
            "ALDI - Fulton St",
            "625 Fulton St, Brooklyn, NY 11217",
            "Downtown Brooklyn",
            "0.4 mi",
            "9AM – 8PM",
            PriceTier::Low,
            &["Budget", "No-Frills"],
            "German discount chain with rock-bottom prices. Bag your own to save.",
        ),
        store(
            5,
            "NYC Fresh Market",
            "150 Myrtle Ave, Brooklyn, NY 11201",
            "Downtown Brooklyn",
            "0.4 mi",
            "7AM – 10PM",
            PriceTier::Low,
            &["Fresh Produce", "Deli"],
            "Neighborhood market with fresh produce and competitive prices.",
        ),
        store(
            6,
            "Bravo Supermarkets",
            "331 Myrtle Ave, Brooklyn, NY 11205",
            "Fort Greene",
            "0.5 mi",
            "7AM – 10PM",
            PriceTier::Low,
            &["Latin Products", "Meat"],
            "Affordable supermarket with great Latin American products and fresh meats.",
        ),
        store(
            7,
            "Whole Foods - Fort Greene",
            "292 Ashland Pl, Brooklyn, NY 11217",
            "Fort Greene",
            "0.5 mi",
            "7AM – 10PM",
            PriceTier::High,
            &["Organic", "365 Brand"],
            "Higher-end but the 365 store brand is competitively priced.",
        ),
        store(
            8,
            "Lidl - Park Slope",
            "461 5th Ave, Brooklyn, NY 11215",
            "Park Slope",
            "1.1 mi",
            "8AM – 9PM",
            PriceTier::Low,
            &["Budget", "European", "Bakery"],
            "German discount chain. Famous for 49¢ croissants and deep discounts.",
        ),
    ]
});
