use leaf_catalog::{create_router, AppConfig, AppState, JsonFileStore, Logger, ProductService};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数为可选的配置文件路径
    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;

    Logger::init(&config.logging.level);

    let store = JsonFileStore::new(&config.storage.data_file);
    if !tokio::fs::try_exists(store.path()).await.unwrap_or(false) {
        warn!("数据文件 {:?} 不存在，产品接口将返回 500", store.path());
    }

    let service = ProductService::from_config(Arc::new(store), &config)?;
    let app = create_router(AppState::new(service), &config)?;

    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    let base_url = config.server.public_base_url.trim_end_matches('/');

    info!("✅ 服务运行在 {}/api/products", base_url);
    info!("🖼️  图片地址 {}/images/", base_url);

    axum::serve(listener, app).await?;
    Ok(())
}
