//! 设置文件加载错误

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("设置文件解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("设置项 '{field}' 无效: {message}")]
    Invalid { field: String, message: String },
}
