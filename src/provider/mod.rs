//! Provider configuration module。
//!
//! - `secret`：凭据字面值 / 环境变量引用及解析器
//! - `settings`：插件级设置的只读接口
//! - `definition`/`record`：提供商定义及其与持久化记录的转换
//! - `hook`：配置返回前的覆盖钩子
//! - `resolver`/`provider_strategy`：配置解析与按类型特化
//! - `validation`：保存前校验
//! - `repository`/`service`：持久化协作方与组合入口

mod definition;
mod hook;
pub mod provider_strategy;
mod record;
mod repository;
mod resolver;
mod secret;
mod service;
mod settings;
mod types;
mod validation;

pub use definition::{FieldMapping, ProviderDefinition};
pub use hook::{BeforeConfigEvent, ConfigHook, ConfigListener};
pub use provider_strategy::Specialization;
pub use repository::{MemoryProviderRepository, ProviderRepository};
pub use resolver::{AdapterRequest, Credentials, ProviderConfigResolver, ResolvedConfig};
pub use secret::{EnvSecretResolver, SecretRef, SecretResolver, StaticSecretResolver};
pub use service::ProviderService;
pub use settings::SettingsStore;
pub use types::ProviderKind;
pub use validation::{MAX_FIELD_LENGTH, ProviderValidator};
