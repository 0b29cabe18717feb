//! # Leaf Catalog
//!
//! 基于 JSON 文件的产品目录服务：
//! - 产品的增删改查，每次请求都重新读取并整体写回数据文件
//! - 产品图片下载与 `/images` 静态文件
//! - 存储通过 [`ProductStore`] 抽象，可替换为内存实现

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::create_router;
pub use app::product::handler::AppState;
pub use app::product::model::{NewProduct, Product, ProductPatch, ProductView};
pub use app::product::service::ProductService;
pub use config::{AppConfig, ConfigError};
pub use crate::core::error::CoreError;
pub use infrastructure::{JsonFileStore, Logger, MemoryStore, ProductStore, StoreError};
