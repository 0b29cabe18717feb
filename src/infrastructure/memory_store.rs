//! 内存存储，用于测试或嵌入场景

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{ProductStore, StoreError};
use crate::app::product::model::Product;

#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        *self.products.write().await = products.to_vec();
        Ok(())
    }
}
