use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};
use bkfresh_core::{builtin_recipes, find_recipe, Recipe};

use crate::middleware::RequestId;

use super::{path_id, ApiError, ApiResponse};

pub(super) async fn list_recipes(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<&'static [Recipe]>> {
    ApiResponse::json(builtin_recipes(), req_id)
}

pub(super) async fn get_recipe(
    Extension(req_id): Extension<RequestId>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<ApiResponse<&'static Recipe>>, ApiError> {
    let id = path_id(&req_id, id)?;
    let recipe =
        find_recipe(id).ok_or_else(|| ApiError::not_found(&req_id, format!("recipe {id}")))?;
    Ok(ApiResponse::json(recipe, req_id))
}
