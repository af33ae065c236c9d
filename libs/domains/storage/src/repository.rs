use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::StorageResult;
use crate::predicate::StoragePredicate;

/// Read access to the storage catalog
///
/// Implementations return raw rows; shaping and pagination happen in the
/// service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Rows whose id is in `ids`, whatever their `active` flag. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[String]) -> StorageResult<Vec<entity::Model>>;

    /// Every row matching `predicate`
    async fn search(&self, predicate: &StoragePredicate) -> StorageResult<Vec<entity::Model>>;
}

/// In-memory implementation of StorageRepository (for development/testing)
///
/// Rows keep insertion order, which is the order searches return them in.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorageRepository {
    records: Arc<RwLock<Vec<entity::Model>>>,
}

impl InMemoryStorageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<entity::Model>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Add a row, replacing any row with the same id in place.
    pub async fn insert(&self, record: entity::Model) {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|r| r.storage_data_id == record.storage_data_id)
        {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorageRepository {
    async fn find_by_ids(&self, ids: &[String]) -> StorageResult<Vec<entity::Model>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| ids.contains(&r.storage_data_id))
            .cloned()
            .collect())
    }

    async fn search(&self, predicate: &StoragePredicate) -> StorageResult<Vec<entity::Model>> {
        let records = self.records.read().await;
        let matches: Vec<_> = records
            .iter()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect();

        tracing::debug!(matched = matches.len(), scanned = records.len(), "In-memory search");
        Ok(matches)
    }
}
