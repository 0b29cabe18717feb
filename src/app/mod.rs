//! 应用层：路由装配

pub mod product;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::{AppConfig, ConfigError};
use crate::core::middleware::{cors_layer, request_logging_middleware};
use product::handler::{
    create_product, delete_product, list_products, product_image, update_product, AppState,
};

/// 创建完整的路由，包括 `/images` 静态文件和跨域配置
pub fn create_router(state: AppState, config: &AppConfig) -> Result<Router, ConfigError> {
    let images = ServeDir::new(state.product_service.images_dir());

    Ok(Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            put(update_product).delete(delete_product),
        )
        .route("/api/products/:id/image", get(product_image))
        .nest_service("/images", images)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors.allowed_origin)?)
        .with_state(state))
}
