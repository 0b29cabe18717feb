//! JSON 文件存储

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::store::{ProductStore, StoreError};
use crate::app::product::model::Product;

/// 以单个 JSON 数组文件保存产品，写入时使用两个空格缩进
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Product>, StoreError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        let products: Vec<Product> =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("从 {:?} 加载了 {} 个产品", self.path, products.len());
        Ok(products)
    }

    async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(products).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!("已将 {} 个产品写入 {:?}", products.len(), self.path);
        Ok(())
    }
}
