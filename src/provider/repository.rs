//! 持久化协作方接口与内存实现。

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;
use entity::providers;

use crate::error::{Result, SocialError};
use crate::ldebug;
use crate::logging::{LogComponent, LogStage};

use super::definition::ProviderDefinition;
use super::validation::ProviderValidator;

/// 提供商定义的持久化协作方
pub trait ProviderRepository: Send + Sync {
    fn find(&self, id: i32) -> Result<Option<ProviderDefinition>>;

    /// 按 id 升序列出全部定义
    fn list(&self) -> Result<Vec<ProviderDefinition>>;

    /// 新定义分配 id；更新不存在的 id 返回 NotFound。
    ///
    /// 实现需在写入时复查 (name, type) 唯一性，校验与写入之间的并发保存
    /// 以 Validation 错误拒绝。
    fn save(&self, definition: ProviderDefinition) -> Result<ProviderDefinition>;
}

/// 以记录形式保存在内存中的仓库，读写都经过记录转换
#[derive(Default)]
pub struct MemoryProviderRepository {
    records: DashMap<i32, providers::Model>,
    next_id: AtomicI32,
    // 唯一性复查与写入在同一临界区内完成
    write_lock: Mutex<()>,
}

impl MemoryProviderRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入已有记录（模拟历史数据）
    pub fn insert_record(&self, record: providers::Model) {
        self.next_id.fetch_max(record.id, Ordering::SeqCst);
        self.records.insert(record.id, record);
    }

    #[must_use]
    pub fn record(&self, id: i32) -> Option<providers::Model> {
        self.records.get(&id).map(|r| r.value().clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProviderRepository for MemoryProviderRepository {
    fn find(&self, id: i32) -> Result<Option<ProviderDefinition>> {
        Ok(self.record(id).map(ProviderDefinition::from))
    }

    fn list(&self) -> Result<Vec<ProviderDefinition>> {
        let mut records: Vec<providers::Model> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.id);

        Ok(records.into_iter().map(ProviderDefinition::from).collect())
    }

    fn save(&self, definition: ProviderDefinition) -> Result<ProviderDefinition> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| SocialError::storage("提供商仓库写锁已损坏"))?;

        ProviderValidator::validate_unique(&definition, &self.list()?)?;

        let now = chrono::Utc::now().naive_utc();

        let (id, created_at) = match definition.id {
            Some(id) => {
                let existing = self
                    .records
                    .get(&id)
                    .ok_or_else(|| SocialError::not_found("提供商", id.to_string()))?;
                (id, existing.created_at)
            }
            None => (self.next_id.fetch_add(1, Ordering::SeqCst) + 1, now),
        };

        let record = definition.to_record(id, created_at, now)?;
        self.records.insert(id, record);

        ldebug!(
            "system",
            LogStage::Db,
            LogComponent::Repository,
            "save_provider",
            "提供商定义已保存",
            provider_id = id,
            provider = definition.name
        );

        Ok(ProviderDefinition {
            id: Some(id),
            ..definition
        })
    }
}

impl fmt::Debug for MemoryProviderRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryProviderRepository")
            .field("records", &self.records.len())
            .finish()
    }
}
