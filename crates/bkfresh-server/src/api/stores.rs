use axum::{
    extract::{rejection::PathRejection, Path, Query},
    Extension, Json,
};
use bkfresh_core::{builtin_stores, filter_stores, find_store, Store, StoreFilter, TierFilter};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{path_id, ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
pub(super) struct StoreQuery {
    pub tier: Option<String>,
    pub q: Option<String>,
}

impl StoreQuery {
    fn to_filter(&self, request_id: &RequestId) -> Result<StoreFilter, ApiError> {
        let tier = self
            .tier
            .as_deref()
            .unwrap_or_default()
            .parse::<TierFilter>()
            .map_err(|e| ApiError::new(request_id.0.as_str(), "bad_request", e.to_string()))?;
        Ok(StoreFilter {
            tier,
            search: self.q.as_deref().map(str::trim).unwrap_or_default().to_string(),
        })
    }
}

pub(super) async fn list_stores(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<ApiResponse<Vec<&'static Store>>>, ApiError> {
    let filter = query.to_filter(&req_id)?;
    let stores = filter_stores(builtin_stores(), &filter);
    Ok(ApiResponse::json(stores, req_id))
}

pub(super) async fn get_store(
    Extension(req_id): Extension<RequestId>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<ApiResponse<&'static Store>>, ApiError> {
    let id = path_id(&req_id, id)?;
    let store = find_store(id).ok_or_else(|| ApiError::not_found(&req_id, format!("store {id}")))?;
    Ok(ApiResponse::json(store, req_id))
}
