//! # Social Login Provider Library
//!
//! 社交登录身份提供商配置解析核心库：凭据解析、Apple 登录特化、
//! 配置覆盖钩子以及保存前校验。

pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod testing;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, SocialError};
pub use provider::{
    ConfigHook, ProviderConfigResolver, ProviderDefinition, ProviderService, ResolvedConfig,
};
