//! # 身份提供商实体定义
//!
//! 社交登录身份提供商表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 身份提供商实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "social_login_providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub handle: Option<String>,
    #[sea_orm(column_name = "type")]
    pub provider_type: String,
    pub client_id: Option<String>,     // 字面值或 $ENV 引用
    pub client_secret: Option<String>, // 字面值或 $ENV 引用
    #[sea_orm(column_type = "Text", nullable)]
    pub field_mapping: Option<String>, // JSON 字符串
    pub credentials_enabled: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            handle: None,
            provider_type: String::new(),
            client_id: None,
            client_secret: None,
            field_mapping: None,
            credentials_enabled: true,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
