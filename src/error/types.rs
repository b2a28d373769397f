//! # 错误类型定义

use thiserror::Error;

use super::{ConfigError, ConversionError, ErrorCategory, ValidationErrors};

/// 社交登录核心的主要错误类型
#[derive(Debug, Error)]
pub enum SocialError {
    /// 配置相关错误（设置文件、Apple 配置块）
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 提供商定义校验失败
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationErrors),

    /// 资源未找到
    #[error("{resource_type}未找到: {identifier}")]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    /// 密钥解析错误
    #[error("密钥解析错误: {message}")]
    Secret {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 序列化/反序列化错误
    #[error("序列化错误: {message}")]
    Serialization {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// 存储协作方错误
    #[error("存储错误: {message}")]
    Storage { message: String },

    /// 附加上下文的错误
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SocialError>,
    },
}

impl SocialError {
    /// 错误分类，用于区分调用方错误与运维错误
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::NotFound { .. } => ErrorCategory::Client,
            Self::Context { source, .. } => source.category(),
            Self::Config { .. }
            | Self::Secret { .. }
            | Self::Serialization { .. }
            | Self::Storage { .. } => ErrorCategory::Server,
        }
    }

    /// 去掉上下文包装后的根错误
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// 是否为配置错误
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.root(), Self::Config { .. })
    }

    /// 是否为资源未找到错误
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound { .. })
    }

    /// 校验错误列表（如果是校验错误）
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self.root() {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// 创建配置错误
    pub fn config<T: Into<String>>(message: T) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的配置错误
    pub fn config_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建资源未找到错误
    pub fn not_found<T: Into<String>, I: Into<String>>(resource_type: T, identifier: I) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// 创建密钥解析错误
    pub fn secret<T: Into<String>>(message: T) -> Self {
        Self::Secret {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的密钥解析错误
    pub fn secret_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Secret {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建序列化错误
    pub fn serialization<T: Into<String>, E: Into<anyhow::Error>>(message: T, source: E) -> Self {
        Self::Serialization {
            message: message.into(),
            source: source.into(),
        }
    }

    /// 创建存储错误
    pub fn storage<T: Into<String>>(message: T) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

// 自动转换常见错误类型
impl From<ConfigError> for SocialError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("配置加载失败", err)
    }
}

impl From<toml::de::Error> for SocialError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML解析失败", err)
    }
}

impl From<ConversionError> for SocialError {
    fn from(err: ConversionError) -> Self {
        Self::serialization("记录转换失败", err)
    }
}

impl From<serde_json::Error> for SocialError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON处理失败", err)
    }
}

