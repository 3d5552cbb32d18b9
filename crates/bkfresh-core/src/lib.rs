pub mod app_config;
pub mod calendar;
pub mod config;
pub mod deals;
pub mod filter;
pub mod recipes;
pub mod resources;
pub mod stores;

pub use app_config::{AppConfig, Environment, LocalDealsLocation, SHEET_ID_PLACEHOLDER};
pub use config::{load_app_config, load_app_config_from_env};
pub use deals::{fallback_deals, Deal, SourceBadge, DEAL_CATEGORIES};
pub use filter::{filter_deals, filter_stores, CategoryFilter, StoreFilter, TierFilter};
pub use recipes::{builtin_recipes, find_recipe, Ingredient, Recipe};
pub use resources::{builtin_resources, Resource};
pub use stores::{builtin_stores, find_store, PriceTier, Store};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid price tier: {0}")]
    InvalidPriceTier(String),
}
