//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::info;
use uuid::Uuid;

use crate::config::ConfigError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件，同时为响应加上请求 id
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        request_id = %request_id,
        "{} {} - {} - {}ms",
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
}

/// 只允许单一来源的跨域层
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| ConfigError::Validation(format!("无效的跨域来源 {}: {}", allowed_origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request()))
}
