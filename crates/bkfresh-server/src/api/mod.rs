mod deals;
mod recipes;
mod resources;
mod stores;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};
use crate::state::SessionState;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn json(data: T, request_id: RequestId) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(request_id.0),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub(super) fn not_found(request_id: &RequestId, what: impl std::fmt::Display) -> Self {
        Self::new(request_id.0.as_str(), "not_found", format!("{what} not found"))
    }
}

/// Unwrap a numeric path id, turning a rejection into a `bad_request` envelope.
pub(super) fn path_id(
    request_id: &RequestId,
    id: Result<Path<u32>, PathRejection>,
) -> Result<u32, ApiError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        ApiError::new(
            request_id.0.as_str(),
            "bad_request",
            format!("invalid id: {}", rejection.body_text()),
        )
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/stores", get(stores::list_stores))
        .route("/api/v1/stores/{id}", get(stores::get_store))
        .route("/api/v1/deals", get(deals::list_deals))
        .route("/api/v1/deals/categories", get(deals::list_categories))
        .route("/api/v1/deals/status", get(deals::deal_status))
        .route("/api/v1/recipes", get(recipes::list_recipes))
        .route("/api/v1/recipes/{id}", get(recipes::get_recipe))
        .route("/api/v1/resources", get(resources::list_resources))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    ApiResponse::json(HealthData { status: "ok" }, req_id)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
