//! Account application service.
//!
//! Orchestrates the account store and the event publisher. Publishing is
//! best-effort throughout: a failed publish is logged and swallowed, the
//! triggering mutation still succeeds. The cache on the card side is
//! allowed to lag; a transient broker problem must never block a
//! legitimate account mutation.

use std::sync::Arc;

use uuid::Uuid;

use cardpay_types::{
    Account, AccountEventPublisher, AccountId, AccountListResponse, AccountRepository,
    AccountResponse, AccountStatus, CreateAccountRequest, DomainError, ServiceError,
    UpdateAccountRequest,
};

/// Application service for account operations.
///
/// Generic over `R: AccountRepository`; the publisher is optional so the
/// service keeps working when no broker is configured.
pub struct AccountService<R: AccountRepository> {
    repo: R,
    publisher: Option<Arc<dyn AccountEventPublisher>>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R, publisher: Option<Arc<dyn AccountEventPublisher>>) -> Self {
        Self { repo, publisher }
    }

    /// Creates a new ACTIVE account with a generated ID and account
    /// number, then announces it.
    pub async fn create(&self, req: CreateAccountRequest) -> Result<AccountResponse, ServiceError> {
        let account_number = Uuid::new_v4().to_string();
        let account = Account::new(account_number, req.holder_name, req.country_code)?;

        self.repo.create(account.clone()).await?;

        self.publish_created(&account).await;

        Ok((&account).into())
    }

    /// Gets an account by ID.
    pub async fn get_by_id(&self, id: AccountId) -> Result<AccountResponse, ServiceError> {
        let account = self.repo.get_by_id(id).await?;
        Ok((&account).into())
    }

    /// Gets an account by its account number.
    pub async fn get_by_number(&self, account_number: &str) -> Result<AccountResponse, ServiceError> {
        let account = self.repo.get_by_number(account_number).await?;
        Ok((&account).into())
    }

    /// Lists all accounts, deleted ones included.
    pub async fn list(&self) -> Result<AccountListResponse, ServiceError> {
        let accounts = self.repo.list().await?;
        Ok(accounts.as_slice().into())
    }

    /// Patches an existing account. Absent or empty fields are left
    /// untouched. A status change is announced after the store accepted
    /// the update.
    pub async fn update(
        &self,
        id: AccountId,
        req: UpdateAccountRequest,
    ) -> Result<AccountResponse, ServiceError> {
        let mut account = self.repo.get_by_id(id).await?;

        if account.is_deleted() {
            return Err(DomainError::UpdateDeletedAccount.into());
        }

        let mut status_changed = false;

        if let Some(number) = req.account_number
            && !number.trim().is_empty()
        {
            account.account_number = number;
        }
        if let Some(name) = req.holder_name
            && !name.trim().is_empty()
        {
            account.holder_name = name;
        }
        if let Some(country) = req.country_code
            && !country.trim().is_empty()
        {
            account.country_code = country;
        }
        if let Some(status) = req.status
            && account.status != status
        {
            account.status = status;
            status_changed = true;
        }

        let stored = self.repo.update(account).await?;

        if status_changed {
            self.publish_status_changed(stored.id, stored.status).await;
        }

        Ok((&stored).into())
    }

    /// Soft-deletes an account and announces the status change.
    ///
    /// Deleting twice fails with a conflict; the status stays DELETED
    /// either way (idempotent failure, not idempotent success).
    pub async fn delete(&self, id: AccountId) -> Result<(), ServiceError> {
        let account = self.repo.get_by_id(id).await?;

        if account.is_deleted() {
            return Err(DomainError::AccountAlreadyDeleted.into());
        }

        self.repo.delete(id).await?;

        self.publish_status_changed(id, AccountStatus::Deleted).await;

        Ok(())
    }

    async fn publish_created(&self, account: &Account) {
        let Some(publisher) = &self.publisher else {
            return;
        };
        if let Err(err) = publisher.publish_created(account.id, account.status).await {
            tracing::warn!(
                %err,
                account_id = %account.id,
                "failed to publish account.created, continuing"
            );
        }
    }

    async fn publish_status_changed(&self, id: AccountId, status: AccountStatus) {
        let Some(publisher) = &self.publisher else {
            return;
        };
        if let Err(err) = publisher.publish_status_changed(id, status).await {
            tracing::warn!(
                %err,
                account_id = %id,
                "failed to publish account.status_changed, continuing"
            );
        }
    }
}
