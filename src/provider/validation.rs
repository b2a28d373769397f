//! # 提供商定义校验
//!
//! 保存前执行的规则，按固定顺序全部运行并汇总所有错误：
//! 必填 → 长度 → (name, type) 唯一 → client id 必填（凭据被显式关闭时豁免）。

use crate::error::{ValidationErrors, ValidationKind};
use crate::ldebug;
use crate::logging::{LogComponent, LogStage};

use super::definition::ProviderDefinition;

/// `name` 与 `type` 的最大长度（字符数）
pub const MAX_FIELD_LENGTH: usize = 255;

/// 提供商定义校验器
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderValidator;

impl ProviderValidator {
    /// 针对已有定义集合校验候选定义
    pub fn validate(
        candidate: &ProviderDefinition,
        existing: &[ProviderDefinition],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_required(&mut errors, "name", &candidate.name, "名称不能为空");
        check_required(&mut errors, "type", &candidate.provider_type, "类型不能为空");
        check_length(&mut errors, "name", &candidate.name, "名称");
        check_length(&mut errors, "type", &candidate.provider_type, "类型");

        // 与唯一性规则相关的字段已有错误时跳过
        if !errors.has_error("name") && !errors.has_error("type") {
            check_unique(&mut errors, candidate, existing);
        }

        if candidate.credentials_enabled && candidate.client_id.is_blank() {
            errors.add("client_id", ValidationKind::Required, "Client ID 不能为空");
        }

        if !errors.is_empty() {
            ldebug!(
                "system",
                LogStage::Validation,
                LogComponent::Validator,
                "validate_provider",
                "提供商定义校验未通过",
                provider = candidate.name,
                error_count = errors.len()
            );
        }

        errors.into_result()
    }
}

impl ProviderValidator {
    /// 仅检查 (name, type) 唯一性，供持久化层在写入时复查
    pub fn validate_unique(
        candidate: &ProviderDefinition,
        existing: &[ProviderDefinition],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_unique(&mut errors, candidate, existing);
        errors.into_result()
    }
}

fn check_required(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, ValidationKind::Required, message);
    }
}

fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.chars().count() > MAX_FIELD_LENGTH {
        errors.add(
            field,
            ValidationKind::TooLong {
                max: MAX_FIELD_LENGTH,
            },
            format!("{label}长度不能超过 {MAX_FIELD_LENGTH} 个字符"),
        );
    }
}

fn check_unique(
    errors: &mut ValidationErrors,
    candidate: &ProviderDefinition,
    existing: &[ProviderDefinition],
) {
    let name = candidate.name.trim().to_lowercase();
    let provider_type = candidate.provider_type.trim().to_lowercase();

    let duplicate = existing.iter().any(|other| {
        (candidate.id.is_none() || other.id != candidate.id)
            && other.name.trim().to_lowercase() == name
            && other.provider_type.trim().to_lowercase() == provider_type
    });

    if duplicate {
        let message = format!(
            "名称 \"{}\" 与类型 \"{}\" 的组合已存在",
            candidate.name, candidate.provider_type
        );
        errors.add("name", ValidationKind::Conflict, message.clone());
        errors.add("type", ValidationKind::Conflict, message);
    }
}
