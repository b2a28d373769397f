//! # 应用配置结构定义

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::provider::{SecretRef, SettingsStore};
use crate::{config_error, ensure_config};

/// 应用主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OAuth 通用设置
    pub oauth: OAuthSettings,
    /// Apple 登录专用配置块
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple: Option<AppleConfig>,
}

/// OAuth 通用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthSettings {
    /// 身份提供商回调地址
    pub callback_url: String,
}

fn default_apple_scope() -> String {
    "name email".to_string()
}

const fn default_verify_signature() -> bool {
    true
}

/// Apple 登录配置
///
/// Apple 使用团队 ID、密钥 ID 与私钥生成客户端密钥，而不是固定的
/// client secret，因此单独配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppleConfig {
    /// Services ID
    pub client_id: SecretRef,
    pub team_id: String,
    pub key_id: String,
    /// PEM 私钥内容，通常写成 `$APPLE_PRIVATE_KEY`
    pub key_content: SecretRef,
    #[serde(default = "default_apple_scope")]
    pub scope: String,
    #[serde(default = "default_verify_signature")]
    pub verify_token_signature: bool,
}

impl AppleConfig {
    /// 缺失的必填字段名
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_blank() {
            missing.push("client_id");
        }
        if self.team_id.trim().is_empty() {
            missing.push("team_id");
        }
        if self.key_id.trim().is_empty() {
            missing.push("key_id");
        }
        if self.key_content.is_blank() {
            missing.push("key_content");
        }
        missing
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl SettingsStore for AppConfig {
    fn callback_url(&self) -> Result<String> {
        Ok(self.oauth.callback_url.clone())
    }

    fn validate_apple_config(&self) -> bool {
        self.apple.as_ref().is_some_and(AppleConfig::is_complete)
    }

    fn apple_config(&self) -> Result<AppleConfig> {
        let apple = self
            .apple
            .as_ref()
            .ok_or_else(|| config_error!("未配置 Apple 登录设置 [apple]"))?;

        let missing = apple.missing_fields();
        ensure_config!(
            missing.is_empty(),
            "Apple 登录设置缺少字段: {}",
            missing.join(", ")
        );

        Ok(apple.clone())
    }
}
