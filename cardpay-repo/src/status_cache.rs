//! In-memory account status cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cardpay_types::{AccountId, AccountStatusCache, AccountStatusEntry, RepoError};

/// In-memory implementation of [`AccountStatusCache`].
///
/// Upsert is a full replacement keyed by account ID: applying the same
/// event twice, or two events in either order, always leaves the entry
/// written last - never a merge.
#[derive(Default)]
pub struct MemoryStatusCache {
    entries: RwLock<HashMap<AccountId, AccountStatusEntry>>,
}

impl MemoryStatusCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStatusCache for MemoryStatusCache {
    async fn upsert(&self, entry: AccountStatusEntry) -> Result<(), RepoError> {
        if entry.account_id.is_nil() {
            return Err(RepoError::InvalidEntry(
                "cache entry has no account ID".into(),
            ));
        }

        self.entries.write().await.insert(entry.account_id, entry);
        Ok(())
    }

    async fn get_by_id(&self, id: AccountId) -> Result<AccountStatusEntry, RepoError> {
        self.entries
            .read()
            .await
            .get(&id)
            .copied()
            .ok_or(RepoError::NotFound)
    }

    async fn exists(&self, id: AccountId) -> bool {
        self.entries.read().await.contains_key(&id)
    }

    async fn delete(&self, id: AccountId) -> Result<(), RepoError> {
        self.entries
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<AccountStatusEntry>, RepoError> {
        Ok(self.entries.read().await.values().copied().collect())
    }
}
