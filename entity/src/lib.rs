//! # Entity 模块
//!
//! 包含社交登录相关的 Sea-ORM 实体定义

pub mod providers;

pub use providers::Entity as Providers;
