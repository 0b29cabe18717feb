//! 产品处理器

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use super::{
    model::{NewProduct, Product, ProductPatch, ProductView},
    service::{ProductService, PRODUCT_NOT_FOUND},
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// 读取路径 id 开头的数字部分，`1abc`、`1.5` 都按 1 处理；没有数字时按不存在处理
fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn product_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, CoreError> {
    let id = parse_id(&id).ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;
    let path = state.product_service.image_path(id).await?;

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(never) => match never {},
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, CoreError> {
    let id = parse_id(&id).ok_or_else(|| CoreError::NotFoundText(PRODUCT_NOT_FOUND.to_string()))?;
    let product = state.product_service.update_product(id, patch).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, CoreError> {
    let id = parse_id(&id).ok_or_else(|| CoreError::NotFoundText(PRODUCT_NOT_FOUND.to_string()))?;
    state.product_service.delete_product(id).await?;
    Ok("Product deleted successfully")
}
