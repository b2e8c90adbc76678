use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use promos_core::{summarize, ListingMeta, Product, ProductDetail, ProductStats, ValidationItem};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_sheets_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductListResponse {
    data: Vec<Product>,
    meta: ProductListMeta,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductListMeta {
    request_id: String,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    listing: ListingMeta,
}

#[derive(Debug, Deserialize)]
pub(super) struct ValidationQuery {
    pub only_invalid: Option<bool>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = state
        .catalog
        .list_all()
        .await
        .map_err(|e| map_sheets_error(req_id.0.clone(), &e))?;

    let listing = ListingMeta::for_listing(&products);

    Ok(Json(ProductListResponse {
        data: products,
        meta: ProductListMeta {
            request_id: req_id.0,
            timestamp: Utc::now(),
            listing,
        },
    }))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let product = state
        .catalog
        .find_by_id(&id)
        .await
        .map_err(|e| map_sheets_error(req_id.0.clone(), &e))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("product {id} not found"),
            )
        })?;

    Ok(Json(ApiResponse {
        data: ProductDetail::new(product),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn product_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ProductStats>>, ApiError> {
    let products = state
        .catalog
        .list_all()
        .await
        .map_err(|e| map_sheets_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: summarize(&products),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn validation_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ValidationQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ValidationItem>>>, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;

    let products = state
        .catalog
        .list_all()
        .await
        .map_err(|e| map_sheets_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: promos_core::validation_report(products, query.only_invalid.unwrap_or(false)),
        meta: ResponseMeta::new(req_id.0),
    }))
}
