//! 按提供商类型区分的配置特化策略。新增特化时在 `Specialization` 中增加分支，
//! 解析器中的 `match` 会强制处理。

pub mod apple;
pub mod standard;

use std::fmt;

/// 配置特化策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialization {
    /// 通用 client id / client secret 配置
    Standard,
    /// Sign in with Apple：团队 ID、密钥 ID、私钥
    Apple,
}

impl Specialization {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Apple => "apple",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
