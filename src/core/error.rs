//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::infrastructure::store::StoreError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// 以纯文本返回的 404
    #[error("{0}")]
    NotFoundText(String),
    #[error("{0}")]
    InternalServerError(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CoreError::NotFoundText(msg) => return (StatusCode::NOT_FOUND, msg).into_response(),
            CoreError::InternalServerError(msg) => {
                error!("内部错误: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            CoreError::Storage(err) => {
                error!("存储操作失败: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
