//! In-memory account store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use cardpay_types::{Account, AccountId, AccountRepository, RepoError};

/// In-memory implementation of [`AccountRepository`].
///
/// One lock guards the whole map; the store is small and operations are
/// short, so a single mutual-exclusion domain is enough.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountStore {
    async fn create(&self, account: Account) -> Result<(), RepoError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.id) {
            return Err(RepoError::DuplicateId);
        }
        // Linear scan: deleted accounts keep their number reserved, so
        // every record counts. O(n) is fine at reference scale.
        if accounts
            .values()
            .any(|a| a.account_number == account.account_number)
        {
            return Err(RepoError::DuplicateNumber);
        }

        accounts.insert(account.id, account);
        Ok(())
    }

    async fn get_by_id(&self, id: AccountId) -> Result<Account, RepoError> {
        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn get_by_number(&self, account_number: &str) -> Result<Account, RepoError> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.account_number == account_number)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, mut account: Account) -> Result<Account, RepoError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(RepoError::NotFound);
        }

        account.updated_at = Utc::now();
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: AccountId) -> Result<(), RepoError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts.get_mut(&id).ok_or(RepoError::NotFound)?;
        account.mark_deleted();
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Account>, RepoError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}
