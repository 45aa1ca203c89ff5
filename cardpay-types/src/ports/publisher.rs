//! Account event publisher port.
//!
//! Publishing is best-effort by contract: callers log a failure and keep
//! going, the triggering operation never rolls back because of it.

use crate::domain::{AccountId, AccountStatus};

/// Error type for publish operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to serialize event: {0}")]
    Serialize(String),

    #[error("broker rejected the event: {0}")]
    Transport(String),
}

/// Port trait for announcing account lifecycle changes.
#[async_trait::async_trait]
pub trait AccountEventPublisher: Send + Sync + 'static {
    /// Emits an `account.created` event.
    async fn publish_created(
        &self,
        account_id: AccountId,
        status: AccountStatus,
    ) -> Result<(), PublishError>;

    /// Emits an `account.status_changed` event.
    async fn publish_status_changed(
        &self,
        account_id: AccountId,
        status: AccountStatus,
    ) -> Result<(), PublishError>;
}
