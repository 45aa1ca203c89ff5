//! Repository port traits.
//!
//! These are the primary ports in the hexagonal architecture. The
//! reference adapters are in-memory maps behind a single lock each;
//! every operation is safe for concurrent invocation.

use crate::domain::{Account, AccountId, AccountStatusEntry, Card, CardId};
use crate::error::RepoError;

/// Canonical store of accounts, owned by the account service.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Stores a new account. Fails with `DuplicateId` or
    /// `DuplicateNumber` if either key is already taken - soft-deleted
    /// accounts keep their number reserved.
    async fn create(&self, account: Account) -> Result<(), RepoError>;

    /// Fails with `NotFound` for unknown IDs.
    async fn get_by_id(&self, id: AccountId) -> Result<Account, RepoError>;

    /// Fails with `NotFound` for unknown account numbers.
    async fn get_by_number(&self, account_number: &str) -> Result<Account, RepoError>;

    /// Replaces the stored value and stamps `updated_at`, returning the
    /// stored account. Fails with `NotFound` if the ID is absent.
    async fn update(&self, account: Account) -> Result<Account, RepoError>;

    /// Soft delete: flips the status to DELETED in place and stamps
    /// `updated_at`. The record is retained. Fails with `NotFound`.
    async fn delete(&self, id: AccountId) -> Result<(), RepoError>;

    /// All accounts, deleted included, in unspecified order.
    async fn list(&self) -> Result<Vec<Account>, RepoError>;
}

/// Canonical store of cards, owned by the card service.
#[async_trait::async_trait]
pub trait CardRepository: Send + Sync + 'static {
    /// Stores a new card. Fails with `DuplicateId` if the ID is taken.
    async fn create(&self, card: Card) -> Result<(), RepoError>;

    /// Fails with `NotFound` for unknown IDs (deleted cards are found).
    async fn get_by_id(&self, id: CardId) -> Result<Card, RepoError>;

    /// Fails with `NotFound` for unknown card numbers.
    async fn get_by_number(&self, card_number: &str) -> Result<Card, RepoError>;

    /// All cards referencing the account; an empty vec is not an error.
    async fn get_by_account_id(&self, account_id: AccountId) -> Result<Vec<Card>, RepoError>;

    /// Soft delete: sets the deleted flag in place; the record and its
    /// ID/number remain queryable. Fails with `NotFound`.
    async fn delete(&self, id: CardId) -> Result<(), RepoError>;

    /// All cards including deleted ones.
    async fn list(&self) -> Result<Vec<Card>, RepoError>;
}

/// Local replica of account statuses, owned by the card service.
///
/// Never authoritative: its sole purpose is fast local eligibility
/// checks without a network call to the account service.
#[async_trait::async_trait]
pub trait AccountStatusCache: Send + Sync + 'static {
    /// Inserts or fully overwrites the entry for its account ID - no
    /// merge semantics, last write wins. Fails with `InvalidEntry` for
    /// a nil account ID.
    async fn upsert(&self, entry: AccountStatusEntry) -> Result<(), RepoError>;

    /// Fails with `NotFound` for unknown IDs.
    async fn get_by_id(&self, id: AccountId) -> Result<AccountStatusEntry, RepoError>;

    /// Never fails.
    async fn exists(&self, id: AccountId) -> bool;

    /// Removes the entry. Fails with `NotFound`.
    async fn delete(&self, id: AccountId) -> Result<(), RepoError>;

    /// All cached entries, in unspecified order.
    async fn list(&self) -> Result<Vec<AccountStatusEntry>, RepoError>;
}
