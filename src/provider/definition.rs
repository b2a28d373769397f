//! # 身份提供商定义
//!
//! 由持久化层加载的只读提供商定义，以及字段映射的结构化表示。

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

use super::secret::SecretRef;
use super::types::ProviderKind;

/// 用户资料字段 → CMS 字段 handle 的映射
///
/// 保留插入顺序，保证序列化往返后与原值一致。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping(IndexMap<String, String>);

impl FieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 从存储的 JSON 文本解析
    pub fn from_json(text: &str) -> ConversionResult<Self> {
        serde_json::from_str(text).map_err(ConversionError::MalformedMapping)
    }

    /// 序列化为存储用的 JSON 文本
    pub fn to_json(&self) -> ConversionResult<String> {
        serde_json::to_string(&self.0).map_err(ConversionError::EncodeMapping)
    }

    #[must_use]
    pub fn with(mut self, profile_field: impl Into<String>, handle: impl Into<String>) -> Self {
        self.insert(profile_field, handle);
        self
    }

    pub fn insert(&mut self, profile_field: impl Into<String>, handle: impl Into<String>) {
        self.0.insert(profile_field.into(), handle.into());
    }

    #[must_use]
    pub fn get(&self, profile_field: &str) -> Option<&str> {
        self.0.get(profile_field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

const fn default_credentials_enabled() -> bool {
    true
}

/// 身份提供商定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDefinition {
    /// 新建时为空，保存后分配且不再变化
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub handle: Option<String>,
    /// 原始类型标识（适配器类名或简称）
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(default)]
    pub client_id: SecretRef,
    #[serde(default)]
    pub client_secret: SecretRef,
    #[serde(default)]
    pub field_mapping: Option<FieldMapping>,
    #[serde(default = "default_credentials_enabled")]
    pub credentials_enabled: bool,
}

impl ProviderDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, provider_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            handle: None,
            provider_type: provider_type.into(),
            client_id: SecretRef::default(),
            client_secret: SecretRef::default(),
            field_mapping: None,
            credentials_enabled: true,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, client_id: &str, client_secret: &str) -> Self {
        self.client_id = SecretRef::parse(client_id);
        self.client_secret = SecretRef::parse(client_secret);
        self
    }

    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    #[must_use]
    pub fn with_field_mapping(mut self, mapping: FieldMapping) -> Self {
        self.field_mapping = Some(mapping);
        self
    }

    #[must_use]
    pub const fn with_credentials_enabled(mut self, enabled: bool) -> Self {
        self.credentials_enabled = enabled;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        ProviderKind::parse(&self.provider_type)
    }

    #[must_use]
    pub fn is_apple_provider(&self) -> bool {
        self.kind().is_apple()
    }

    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl fmt::Display for ProviderDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn field_mapping_round_trip_preserves_order() {
        let mapping = FieldMapping::new()
            .with("lastName", "surname")
            .with("email", "contactEmail")
            .with("photoURL", "avatar");

        let text = mapping.to_json().unwrap();
        assert_eq!(
            text,
            r#"{"lastName":"surname","email":"contactEmail","photoURL":"avatar"}"#
        );
        assert_eq!(FieldMapping::from_json(&text).unwrap(), mapping);
    }

    #[rstest]
    #[case(&[("名字", "姓名"), ("ville", "città")])]
    #[case(&[("quote\"d", "it's \"fine\"")])]
    #[case(&[("back\\slash", "C:\\Users\\x"), ("tab\t", "line\nbreak")])]
    #[case(&[("", "emptyKey"), ("emptyValue", "")])]
    #[case(&[("emoji", "🙂"), ("nul", "\u{0}")])]
    fn field_mapping_round_trip_any_strings(#[case] pairs: &[(&str, &str)]) {
        let mapping: FieldMapping = pairs.iter().copied().collect();

        let text = mapping.to_json().unwrap();
        let loaded = FieldMapping::from_json(&text).unwrap();

        assert_eq!(loaded, mapping);
        assert_eq!(loaded.iter().collect::<Vec<_>>(), pairs.to_vec());
    }

    #[test]
    fn empty_field_mapping_round_trip() {
        let mapping = FieldMapping::new();
        let text = mapping.to_json().unwrap();
        assert_eq!(text, "{}");
        assert_eq!(FieldMapping::from_json(&text).unwrap(), mapping);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err = FieldMapping::from_json(r#"{"email": 3}"#).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedMapping(_)));
        assert!(err.to_string().starts_with("字段映射格式错误"));
    }

    #[test]
    fn definition_defaults_and_display() {
        let definition = ProviderDefinition::new("Sign in with Apple", "Hybridauth\\Provider\\Apple");
        assert!(definition.is_new());
        assert!(definition.credentials_enabled);
        assert!(definition.is_apple_provider());
        assert_eq!(definition.to_string(), "Sign in with Apple");
    }

    #[test]
    fn definition_deserializes_with_defaults() {
        let definition: ProviderDefinition = serde_json::from_str(
            r#"{"name": "Google Login", "type": "google", "client_id": "$GOOGLE_ID"}"#,
        )
        .unwrap();

        assert_eq!(definition.kind(), ProviderKind::Google);
        assert_eq!(definition.client_id, SecretRef::EnvRef("GOOGLE_ID".to_string()));
        assert!(definition.client_secret.is_blank());
        assert!(definition.credentials_enabled);
    }
}
