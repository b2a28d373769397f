//! 持久化记录与提供商定义之间的转换。
//!
//! 字段映射在记录中以 JSON 文本存储，加载时解析为结构化映射，保存时重新序列化。
//! 空白或无法解析的文本按未配置映射加载，单条损坏记录不影响其他定义的读写。

use chrono::NaiveDateTime;
use entity::providers;

use crate::error::ConversionResult;
use crate::logging::{LogComponent, LogStage};
use crate::lwarn;

use super::definition::{FieldMapping, ProviderDefinition};
use super::secret::SecretRef;

fn load_field_mapping(id: i32, text: Option<&str>) -> Option<FieldMapping> {
    let text = text.map(str::trim).filter(|t| !t.is_empty())?;

    match FieldMapping::from_json(text) {
        Ok(mapping) => Some(mapping),
        Err(e) => {
            lwarn!(
                "system",
                LogStage::Db,
                LogComponent::Repository,
                "load_field_mapping",
                "字段映射无法解析，按未配置处理",
                provider_id = id,
                error = e
            );
            None
        }
    }
}

impl From<providers::Model> for ProviderDefinition {
    fn from(model: providers::Model) -> Self {
        Self {
            id: Some(model.id),
            field_mapping: load_field_mapping(model.id, model.field_mapping.as_deref()),
            name: model.name,
            handle: model.handle,
            provider_type: model.provider_type,
            client_id: model.client_id.map(SecretRef::from).unwrap_or_default(),
            client_secret: model.client_secret.map(SecretRef::from).unwrap_or_default(),
            credentials_enabled: model.credentials_enabled,
        }
    }
}

fn optional_raw(secret: &SecretRef) -> Option<String> {
    let raw = secret.raw();
    if raw.is_empty() { None } else { Some(raw) }
}

impl ProviderDefinition {
    /// 生成待保存的记录
    pub fn to_record(
        &self,
        id: i32,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> ConversionResult<providers::Model> {
        let field_mapping = self
            .field_mapping
            .as_ref()
            .map(FieldMapping::to_json)
            .transpose()?;

        Ok(providers::Model {
            id,
            name: self.name.clone(),
            handle: self.handle.clone(),
            provider_type: self.provider_type.clone(),
            client_id: optional_raw(&self.client_id),
            client_secret: optional_raw(&self.client_secret),
            field_mapping,
            credentials_enabled: self.credentials_enabled,
            created_at,
            updated_at,
        })
    }
}
