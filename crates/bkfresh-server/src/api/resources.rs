use axum::{Extension, Json};
use bkfresh_core::{builtin_resources, Resource};
use serde::Serialize;

use crate::middleware::RequestId;

use super::ApiResponse;

#[derive(Debug, Serialize)]
pub(super) struct ResourceItem {
    #[serde(flatten)]
    resource: &'static Resource,
    linked: bool,
    action_label: String,
}

pub(super) async fn list_resources(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<ResourceItem>>> {
    let data = builtin_resources()
        .iter()
        .map(|resource| ResourceItem {
            resource,
            linked: resource.is_linked(),
            action_label: resource.action_label(),
        })
        .collect();
    ApiResponse::json(data, req_id)
}
