//! 基础设施层：存储与日志

pub mod json_store;
pub mod logger;
pub mod memory_store;
pub mod store;

pub use json_store::JsonFileStore;
pub use logger::Logger;
pub use memory_store::MemoryStore;
pub use store::{ProductStore, StoreError};
