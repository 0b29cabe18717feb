//! 服务配置
//!
//! 默认值即线上使用的固定配置，也可以从 TOML 文件加载。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// 服务配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    pub port: u16,
    /// 生成 `coverImageUrl` 使用的对外地址
    pub public_base_url: String,
}

/// 跨域配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

/// 存储配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 产品数据文件
    pub data_file: PathBuf,
    /// 图片目录
    pub images_dir: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8989,
            public_base_url: "http://localhost:8989".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "https://leaf-and-lore.web.app".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            images_dir: PathBuf::from("images"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn public_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.public_base_url)
            .map_err(|e| ConfigError::Validation(format!("无效的对外地址: {}", e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Validation(format!(
                "对外地址不能作为基础地址: {}",
                self.public_base_url
            )));
        }
        Ok(url)
    }
}

impl AppConfig {
    /// 从配置文件加载配置，缺失的项使用默认值
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        self.server.public_base_url()?;

        if self.cors.allowed_origin.is_empty() {
            return Err(ConfigError::Validation("跨域来源不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
