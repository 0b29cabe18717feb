//! 产品存储端口

use async_trait::async_trait;
use std::path::PathBuf;

use crate::app::product::model::Product;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("访问数据文件 {path:?} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析数据文件 {path:?} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("序列化产品列表失败: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// 整体加载、整体保存的产品集合存储
///
/// 实现之间不共享任何缓存，调用方每次操作都应重新 `load`。
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, StoreError>;

    /// 用给定序列替换全部已保存内容
    async fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}
