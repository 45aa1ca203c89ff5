//! Tests for the in-memory store adapters.

use std::sync::Arc;

use cardpay_types::{
    Account, AccountId, AccountRepository, AccountStatus, AccountStatusCache, AccountStatusEntry,
    Card, CardRepository, RepoError,
};
use uuid::Uuid;

use crate::{MemoryAccountStore, MemoryCardStore, MemoryStatusCache};

fn account(number: &str) -> Account {
    Account::new(number.to_string(), "Alice".to_string(), "US".to_string()).unwrap()
}

fn card(number: &str, account_id: AccountId) -> Card {
    Card::new(number.to_string(), "US".to_string(), account_id).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Account store
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn created_account_readable_by_id_and_number() {
    let store = MemoryAccountStore::new();
    let account = account("ACC-001");

    store.create(account.clone()).await.unwrap();

    assert_eq!(store.get_by_id(account.id).await.unwrap(), account);
    assert_eq!(store.get_by_number("ACC-001").await.unwrap(), account);
}

#[tokio::test]
async fn duplicate_account_number_is_a_conflict() {
    let store = MemoryAccountStore::new();
    store.create(account("ACC-001")).await.unwrap();

    let result = store.create(account("ACC-001")).await;
    assert!(matches!(result, Err(RepoError::DuplicateNumber)));

    // Exactly one record retained for that number.
    let all = store.list().await.unwrap();
    assert_eq!(
        all.iter().filter(|a| a.account_number == "ACC-001").count(),
        1
    );
}

#[tokio::test]
async fn duplicate_id_is_a_conflict() {
    let store = MemoryAccountStore::new();
    let first = account("ACC-001");
    let mut second = account("ACC-002");
    second.id = first.id;

    store.create(first).await.unwrap();
    let result = store.create(second).await;
    assert!(matches!(result, Err(RepoError::DuplicateId)));
}

#[tokio::test]
async fn number_stays_reserved_after_soft_delete() {
    let store = MemoryAccountStore::new();
    let account = account("ACC-001");
    store.create(account.clone()).await.unwrap();
    store.delete(account.id).await.unwrap();

    let result = store.create(self::account("ACC-001")).await;
    assert!(matches!(result, Err(RepoError::DuplicateNumber)));
}

#[tokio::test]
async fn update_replaces_and_stamps() {
    let store = MemoryAccountStore::new();
    let mut account = account("ACC-001");
    store.create(account.clone()).await.unwrap();
    let before = account.updated_at;

    account.holder_name = "Bob".to_string();
    let stored = store.update(account.clone()).await.unwrap();

    assert_eq!(stored.holder_name, "Bob");
    assert!(stored.updated_at >= before);
    assert_eq!(store.get_by_id(account.id).await.unwrap(), stored);
}

#[tokio::test]
async fn update_unknown_account_not_found() {
    let store = MemoryAccountStore::new();
    let result = store.update(account("ACC-001")).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn delete_is_soft() {
    let store = MemoryAccountStore::new();
    let account = account("ACC-001");
    store.create(account.clone()).await.unwrap();

    store.delete(account.id).await.unwrap();

    let stored = store.get_by_id(account.id).await.unwrap();
    assert_eq!(stored.status, AccountStatus::Deleted);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_unknown_account_not_found() {
    let store = MemoryAccountStore::new();
    let result = store.delete(AccountId::new()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn list_empty_store_is_empty_not_an_error() {
    let store = MemoryAccountStore::new();
    let all = store.list().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn concurrent_creates_do_not_lose_records() {
    let store = Arc::new(MemoryAccountStore::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(account(&format!("ACC-{i:03}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 32);
}

// ─────────────────────────────────────────────────────────────────────────────
// Card store
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn card_roundtrip_by_id_and_number() {
    let store = MemoryCardStore::new();
    let card = card("US-1a2b3c4d", AccountId::new());

    store.create(card.clone()).await.unwrap();

    assert_eq!(store.get_by_id(card.id).await.unwrap(), card);
    assert_eq!(store.get_by_number("US-1a2b3c4d").await.unwrap(), card);
}

#[tokio::test]
async fn cards_by_account_empty_is_not_an_error() {
    let store = MemoryCardStore::new();
    let cards = store.get_by_account_id(AccountId::new()).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn cards_by_account_filters_other_accounts() {
    let store = MemoryCardStore::new();
    let owner = AccountId::new();
    store.create(card("US-aaaaaaaa", owner)).await.unwrap();
    store.create(card("US-bbbbbbbb", owner)).await.unwrap();
    store
        .create(card("US-cccccccc", AccountId::new()))
        .await
        .unwrap();

    let cards = store.get_by_account_id(owner).await.unwrap();
    assert_eq!(cards.len(), 2);
}

#[tokio::test]
async fn deleted_card_stays_queryable() {
    let store = MemoryCardStore::new();
    let card = card("US-1a2b3c4d", AccountId::new());
    store.create(card.clone()).await.unwrap();

    store.delete(card.id).await.unwrap();

    let stored = store.get_by_id(card.id).await.unwrap();
    assert!(stored.deleted);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Status cache
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_then_get() {
    let cache = MemoryStatusCache::new();
    let id = AccountId::new();

    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Active))
        .await
        .unwrap();

    let entry = cache.get_by_id(id).await.unwrap();
    assert_eq!(entry.status, AccountStatus::Active);
    assert!(cache.exists(id).await);
}

#[tokio::test]
async fn upsert_is_full_replacement_last_write_wins() {
    let cache = MemoryStatusCache::new();
    let id = AccountId::new();

    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Active))
        .await
        .unwrap();
    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Deleted))
        .await
        .unwrap();

    assert_eq!(
        cache.get_by_id(id).await.unwrap().status,
        AccountStatus::Deleted
    );

    // Apply the same two writes in the opposite order on a fresh cache.
    let cache = MemoryStatusCache::new();
    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Deleted))
        .await
        .unwrap();
    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Active))
        .await
        .unwrap();

    assert_eq!(
        cache.get_by_id(id).await.unwrap().status,
        AccountStatus::Active
    );
    assert_eq!(cache.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn nil_account_id_is_an_invalid_entry() {
    let cache = MemoryStatusCache::new();
    let entry = AccountStatusEntry::new(AccountId::from_uuid(Uuid::nil()), AccountStatus::Active);

    let result = cache.upsert(entry).await;
    assert!(matches!(result, Err(RepoError::InvalidEntry(_))));
}

#[tokio::test]
async fn delete_removes_entry() {
    let cache = MemoryStatusCache::new();
    let id = AccountId::new();
    cache
        .upsert(AccountStatusEntry::new(id, AccountStatus::Active))
        .await
        .unwrap();

    cache.delete(id).await.unwrap();

    assert!(!cache.exists(id).await);
    assert!(matches!(
        cache.delete(id).await,
        Err(RepoError::NotFound)
    ));
}
