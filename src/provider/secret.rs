//! 凭据间接引用：字面值或 `$NAME` 环境变量引用。

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SocialError};
use crate::ldebug;
use crate::logging::{LogComponent, LogStage};

// `\w` 按 ASCII 解释
static ENV_REF: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\$((?-u:\w)+)$").ok());

/// 已解析的凭据引用
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SecretRef {
    Literal(String),
    EnvRef(String),
}

impl SecretRef {
    /// `$NAME`（NAME 仅由字母、数字、下划线组成）视为环境变量引用，其余原样作为字面值。
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        ENV_REF
            .as_ref()
            .and_then(|re| re.captures(raw))
            .and_then(|caps| caps.get(1))
            .map_or_else(
                || Self::Literal(raw.to_string()),
                |name| Self::EnvRef(name.as_str().to_string()),
            )
    }

    /// 存储时使用的原始写法
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::EnvRef(name) => format!("${name}"),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Literal(value) => value.trim().is_empty(),
            Self::EnvRef(_) => false,
        }
    }

    #[must_use]
    pub const fn is_env_ref(&self) -> bool {
        matches!(self, Self::EnvRef(_))
    }
}

impl Default for SecretRef {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl From<String> for SecretRef {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SecretRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SecretRef> for String {
    fn from(secret: SecretRef) -> Self {
        secret.raw()
    }
}

// 字面值可能就是密钥本身，调试输出中隐藏
impl fmt::Debug for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) if value.is_empty() => f.write_str("Literal(\"\")"),
            Self::Literal(_) => f.write_str("Literal(***)"),
            Self::EnvRef(name) => f.debug_tuple("EnvRef").field(name).finish(),
        }
    }
}

/// 凭据解析器
///
/// 未设置的环境变量按原样返回引用写法（`$NAME`），与 CMS 的环境变量解析规则一致。
pub trait SecretResolver: Send + Sync {
    fn resolve(&self, secret: &SecretRef) -> Result<String>;

    /// 直接解析原始字符串
    fn resolve_raw(&self, raw: &str) -> Result<String> {
        self.resolve(&SecretRef::parse(raw))
    }
}

/// 读取进程环境变量的解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretResolver;

impl SecretResolver for EnvSecretResolver {
    fn resolve(&self, secret: &SecretRef) -> Result<String> {
        let name = match secret {
            SecretRef::Literal(value) => return Ok(value.clone()),
            SecretRef::EnvRef(name) => name,
        };

        match env::var(name) {
            Ok(value) => Ok(value),
            Err(env::VarError::NotPresent) => {
                ldebug!(
                    "system",
                    LogStage::Resolution,
                    LogComponent::SecretResolver,
                    "env_unset",
                    "环境变量未设置，保留原始引用",
                    variable = name
                );
                Ok(secret.raw())
            }
            Err(err @ env::VarError::NotUnicode(_)) => Err(SocialError::secret_with_source(
                format!("环境变量 {name} 不是有效的 UTF-8"),
                err,
            )),
        }
    }
}

/// 基于内存映射的解析器，用于测试或嵌入式部署
#[derive(Debug, Clone, Default)]
pub struct StaticSecretResolver {
    vars: HashMap<String, String>,
}

impl StaticSecretResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticSecretResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SecretResolver for StaticSecretResolver {
    fn resolve(&self, secret: &SecretRef) -> Result<String> {
        match secret {
            SecretRef::Literal(value) => Ok(value.clone()),
            SecretRef::EnvRef(name) => Ok(self
                .vars
                .get(name)
                .cloned()
                .unwrap_or_else(|| secret.raw())),
        }
    }
}
