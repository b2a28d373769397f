//! 字段映射在结构化形式与存储文本之间转换时的错误

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    /// 存储文本不是字符串到字符串的 JSON 对象
    #[error("字段映射格式错误: {0}")]
    MalformedMapping(#[source] serde_json::Error),

    #[error("字段映射序列化失败: {0}")]
    EncodeMapping(#[source] serde_json::Error),
}
