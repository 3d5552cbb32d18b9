//! Store and deal filtering.
//!
//! Pure functions over in-memory lists. Results keep the input order; there
//! is no ranking, sorting, or pagination.

use crate::deals::Deal;
use crate::stores::{PriceTier, Store};
use crate::CoreError;

const SHOW_ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    All,
    Only(PriceTier),
}

impl TierFilter {
    #[must_use]
    pub fn matches(self, tier: PriceTier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(wanted) => wanted == tier,
        }
    }
}

impl std::str::FromStr for TierFilter {
    type Err = CoreError;

    /// `""` and `"All"` (any case) select every tier; otherwise a tier symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(SHOW_ALL) {
            return Ok(TierFilter::All);
        }
        s.parse().map(TierFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(SHOW_ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Criteria for the store directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreFilter {
    pub tier: TierFilter,
    /// Case-insensitive substring matched against name and neighborhood.
    pub search: String,
}

impl StoreFilter {
    #[must_use]
    pub fn matches(&self, store: &Store) -> bool {
        self.tier.matches(store.price_level) && self.matches_search(store)
    }

    fn matches_search(&self, store: &Store) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        store.name.to_lowercase().contains(&needle)
            || store.neighborhood.to_lowercase().contains(&needle)
    }
}

#[must_use]
pub fn filter_stores<'a>(stores: &'a [Store], filter: &StoreFilter) -> Vec<&'a Store> {
    stores.iter().filter(|s| filter.matches(s)).collect()
}

#[must_use]
pub fn filter_deals<'a>(deals: &'a [Deal], filter: &CategoryFilter) -> Vec<&'a Deal> {
    deals.iter().filter(|d| filter.matches(&d.category)).collect()
}
