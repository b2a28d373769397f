//! # 测试 Mock 对象

use mockall::mock;

use crate::config::AppleConfig;
use crate::error::Result;
use crate::provider::{ProviderDefinition, ProviderRepository, SecretRef, SecretResolver, SettingsStore};

// Mock 设置存储
mock! {
    pub SettingsStore {}

    impl SettingsStore for SettingsStore {
        fn callback_url(&self) -> Result<String>;
        fn validate_apple_config(&self) -> bool;
        fn apple_config(&self) -> Result<AppleConfig>;
    }
}

// Mock 凭据解析器
mock! {
    pub SecretResolver {}

    impl SecretResolver for SecretResolver {
        fn resolve(&self, secret: &SecretRef) -> Result<String>;
    }
}

// Mock 持久化协作方
mock! {
    pub ProviderRepository {}

    impl ProviderRepository for ProviderRepository {
        fn find(&self, id: i32) -> Result<Option<ProviderDefinition>>;
        fn list(&self) -> Result<Vec<ProviderDefinition>>;
        fn save(&self, definition: ProviderDefinition) -> Result<ProviderDefinition>;
    }
}
