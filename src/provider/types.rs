use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::provider_strategy::Specialization;

/// 身份提供商类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Apple,
    Google,
    Facebook,
    Twitter,
    LinkedIn,
    Microsoft,
    GitHub,
    Discord,
    Custom(String),
}

impl ProviderKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Apple => "apple",
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::Microsoft => "microsoft",
            Self::GitHub => "github",
            Self::Discord => "discord",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// 适配器类名可能带命名空间（如 `Hybridauth\Provider\Apple`），只取最后一段
    fn normalize(input: &str) -> String {
        input
            .trim()
            .rsplit(['\\', '/', ':'])
            .next()
            .unwrap_or(input)
            .to_ascii_lowercase()
    }

    #[must_use]
    pub fn parse(name: &str) -> Self {
        let normalized = Self::normalize(name);
        match normalized.as_str() {
            "apple" | "signinwithapple" => Self::Apple,
            "google" => Self::Google,
            "facebook" => Self::Facebook,
            "twitter" | "x" => Self::Twitter,
            "linkedin" | "linkedinopenid" => Self::LinkedIn,
            "microsoft" | "microsoftgraph" | "azure" => Self::Microsoft,
            "github" => Self::GitHub,
            "discord" => Self::Discord,
            _ => Self::Custom(normalized),
        }
    }

    /// 配置解析时使用的特化策略
    #[must_use]
    pub const fn specialization(&self) -> Specialization {
        match self {
            Self::Apple => Specialization::Apple,
            Self::Google
            | Self::Facebook
            | Self::Twitter
            | Self::LinkedIn
            | Self::Microsoft
            | Self::GitHub
            | Self::Discord
            | Self::Custom(_) => Specialization::Standard,
        }
    }

    #[must_use]
    pub const fn is_apple(&self) -> bool {
        matches!(self, Self::Apple)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
