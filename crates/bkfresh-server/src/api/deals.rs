//! Deal board endpoints.
//!
//! - `GET /api/v1/deals?category=`   active deals, optionally by category
//! - `GET /api/v1/deals/categories`  category tabs, `"All"` first
//! - `GET /api/v1/deals/status`      provenance and freshness of the board

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use bkfresh_core::calendar::{today, week_label};
use bkfresh_core::{filter_deals, CategoryFilter, Deal, SourceBadge, DEAL_CATEGORIES};
use bkfresh_sources::DealSource;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

/// A deal with its display helpers already applied.
#[derive(Debug, Serialize)]
pub(super) struct DealItem {
    store: String,
    item: String,
    price: String,
    /// Present only when it differs from `price`.
    original_price: Option<String>,
    category: String,
    icon: String,
    expires_in: String,
    expiry_label: Option<String>,
    is_everyday: bool,
    sale_story: Option<String>,
    source: Option<String>,
    source_badge: Option<SourceBadge>,
}

impl From<&Deal> for DealItem {
    fn from(deal: &Deal) -> Self {
        Self {
            store: deal.store.clone(),
            item: deal.item.clone(),
            price: deal.price.clone(),
            original_price: deal.original_price.clone().filter(|_| deal.has_savings()),
            category: deal.category.clone(),
            icon: deal.icon_or_default().to_string(),
            expires_in: deal.expires_in.clone(),
            expiry_label: deal.expiry_label(),
            is_everyday: deal.is_everyday(),
            sale_story: deal.visible_sale_story().map(str::to_string),
            source: deal.source.clone(),
            source_badge: deal.source_badge(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DealQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct DealStatus {
    source: DealSource,
    source_label: &'static str,
    last_updated: Option<String>,
    week_label: String,
    deal_count: usize,
}

pub(super) async fn list_deals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DealQuery>,
) -> Json<ApiResponse<Vec<DealItem>>> {
    let filter = CategoryFilter::parse(query.category.as_deref().unwrap_or_default());
    let board = state.session.snapshot().await;
    let data = filter_deals(&board.deals, &filter)
        .into_iter()
        .map(DealItem::from)
        .collect();
    ApiResponse::json(data, req_id)
}

pub(super) async fn list_categories(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<&'static str>>> {
    let categories = std::iter::once("All").chain(DEAL_CATEGORIES).collect();
    ApiResponse::json(categories, req_id)
}

pub(super) async fn deal_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DealStatus>> {
    let board = state.session.snapshot().await;
    let status = DealStatus {
        source: board.source,
        source_label: board.source.display_label(),
        last_updated: board.last_updated,
        week_label: week_label(today()),
        deal_count: board.deals.len(),
    };
    ApiResponse::json(status, req_id)
}
