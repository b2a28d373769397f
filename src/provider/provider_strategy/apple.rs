use serde_json::{Map, Value};

use crate::config::AppleConfig;
use crate::error::{Context, Result, SocialError};
use crate::logging::{LogComponent, LogStage};
use crate::lwarn;
use crate::provider::{Credentials, ResolvedConfig, SecretResolver, SettingsStore};

/// 由 Apple 配置块生成完整配置（回调地址由调用方补上）
///
/// 配置块无效时直接失败，不回退到通用配置，避免生成不可用的适配器。
pub fn build(settings: &dyn SettingsStore, secrets: &dyn SecretResolver) -> Result<ResolvedConfig> {
    if !settings.validate_apple_config() {
        let reason = settings
            .apple_config()
            .err()
            .map_or_else(|| "配置块校验未通过".to_string(), |e| e.to_string());

        lwarn!(
            "system",
            LogStage::Resolution,
            LogComponent::ConfigResolver,
            "apple_config_invalid",
            "Apple 登录配置无效",
            reason = reason
        );

        return Err(SocialError::config(format!("Apple 登录配置无效: {reason}")));
    }

    let apple = settings.apple_config()?;
    into_config(&apple, secrets).context("解析 Apple 登录配置失败")
}

fn into_config(apple: &AppleConfig, secrets: &dyn SecretResolver) -> Result<ResolvedConfig> {
    let mut extra = Map::new();
    extra.insert("team_id".to_string(), Value::String(apple.team_id.clone()));
    extra.insert("key_id".to_string(), Value::String(apple.key_id.clone()));
    extra.insert("scope".to_string(), Value::String(apple.scope.clone()));
    extra.insert(
        "verify_token_signature".to_string(),
        Value::Bool(apple.verify_token_signature),
    );

    Ok(ResolvedConfig {
        callback_url: String::new(),
        credentials: Credentials {
            id: secrets.resolve(&apple.client_id)?,
            secret: secrets.resolve(&apple.key_content)?,
        },
        // Apple 通过 scope 请求邮箱
        include_email: false,
        extra,
    })
}
