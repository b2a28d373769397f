//! 常用错误类型与宏的统一导入

pub use super::{
    ConfigError, ConfigResult, Context, ConversionError, ConversionResult, ErrorCategory,
    FieldError, ValidationErrors, ValidationKind, Result, SocialError,
};

pub use crate::{config_error, ensure_config, not_found_error};
