use crate::config::AppleConfig;
use crate::error::Result;

/// 插件级设置的只读来源
///
/// `validate_apple_config` 只负责给出开关，具体的配置缺陷由
/// `apple_config` 以错误形式报告。
pub trait SettingsStore: Send + Sync {
    /// OAuth 回调地址，每次解析都重新读取
    fn callback_url(&self) -> Result<String>;

    /// Apple 配置块是否完整可用
    fn validate_apple_config(&self) -> bool;

    fn apple_config(&self) -> Result<AppleConfig>;
}
