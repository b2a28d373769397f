//! # 错误处理模块
//!
//! `SocialError` 是对外唯一的错误类型。设置加载与字段映射转换各有
//! 细分错误，经 `From` 汇入 `SocialError`。

mod config;
mod conversion;
pub mod macros;
pub mod prelude;
mod types;
mod validation;

pub use config::ConfigError;
pub use conversion::ConversionError;
pub use types::SocialError;
pub use validation::{FieldError, ValidationErrors, ValidationKind};

pub type Result<T> = std::result::Result<T, SocialError>;

/// 设置文件校验结果
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// 字段映射转换结果
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// 为错误附加一层描述，保留原始错误用于 `root()` 判断
pub trait Context<T> {
    fn context(self, context: impl std::fmt::Display) -> Result<T>;

    fn with_context<C: std::fmt::Display>(self, context: impl FnOnce() -> C) -> Result<T>;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: Into<SocialError>,
{
    fn context(self, context: impl std::fmt::Display) -> Result<T> {
        self.with_context(|| context)
    }

    fn with_context<C: std::fmt::Display>(self, context: impl FnOnce() -> C) -> Result<T> {
        self.map_err(|error| SocialError::Context {
            context: context().to_string(),
            source: Box::new(error.into()),
        })
    }
}

/// 错误归属：调用方（管理界面 / 请求处理）还是运维配置与协作方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Client,
    Server,
}
