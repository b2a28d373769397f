//! # 配置管理模块
//!
//! 处理插件设置的加载与验证

mod app_config;

pub use app_config::{AppConfig, AppleConfig, OAuthSettings};

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, Result, SocialError};
use crate::linfo;
use crate::logging::{LogComponent, LogStage};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SOCIAL_LOGIN_CONFIG_PATH";

/// 计算配置文件路径：优先使用环境变量，否则按 `RUST_ENV` 选择
#[must_use]
pub fn config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    PathBuf::from(format!("config/config.{env}.toml"))
}

/// 加载配置文件
pub fn load_config() -> Result<AppConfig> {
    load_config_from(config_path())
}

/// 从指定路径加载配置文件
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SocialError::config(format!(
            "配置文件不存在: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        SocialError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
    })?;

    let config = parse_config(&content)?;

    linfo!(
        "system",
        LogStage::Configuration,
        LogComponent::Settings,
        "load_config",
        "配置文件加载完成",
        path = path.display(),
        apple_configured = config.apple.is_some()
    );

    Ok(config)
}

/// 解析并验证配置内容
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::from)?;

    // 验证配置的有效性
    validate_config(&config)?;

    Ok(config)
}

/// 验证配置有效性
///
/// Apple 配置块不完整不算加载失败，它只决定 `validate_apple_config` 的结果。
fn validate_config(config: &AppConfig) -> ConfigResult<()> {
    let callback = config.oauth.callback_url.trim();
    if callback.is_empty() {
        return Err(ConfigError::Invalid {
            field: "oauth.callback_url".to_string(),
            message: "回调地址不能为空".to_string(),
        });
    }

    url::Url::parse(callback).map_err(|e| ConfigError::Invalid {
        field: "oauth.callback_url".to_string(),
        message: format!("回调地址格式错误: {e}"),
    })?;

    Ok(())
}
