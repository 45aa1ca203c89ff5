//! End-to-end tests for the account -> broker -> card pipeline, run
//! in-process over the channel broker.

use std::sync::Arc;
use std::time::Duration;

use cardpay_broker::{AccountStatusSubscriber, ChannelBroker, SubscriberHandle, SubscriberState};
use cardpay_hex::{AccountService, CardService};
use cardpay_repo::{MemoryAccountStore, MemoryCardStore, MemoryStatusCache};
use cardpay_types::{
    AccountStatus, CreateAccountRequest, CreateCardRequest, DomainError, ServiceError,
    UpdateAccountRequest,
};

struct Pipeline {
    accounts: AccountService<MemoryAccountStore>,
    cards: CardService<MemoryCardStore, MemoryStatusCache>,
    handle: SubscriberHandle,
    worker: tokio::task::JoinHandle<()>,
}

impl Pipeline {
    fn start() -> Self {
        let (publisher, source) = ChannelBroker::new(64);

        let accounts =
            AccountService::new(MemoryAccountStore::new(), Some(Arc::new(publisher)));

        let statuses = Arc::new(MemoryStatusCache::new());
        let subscriber = AccountStatusSubscriber::new(source, statuses.clone());
        let handle = subscriber.handle();
        let worker = tokio::spawn(subscriber.run());

        let cards = CardService::new(MemoryCardStore::new(), statuses);

        Self {
            accounts,
            cards,
            handle,
            worker,
        }
    }

    async fn settle(&self) {
        // Give the subscriber a moment to drain the channel.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    async fn shutdown(self) {
        self.handle.stop();
        tokio::time::timeout(Duration::from_secs(1), self.worker)
            .await
            .expect("subscriber must stop within the grace period")
            .unwrap();
        assert_eq!(self.handle.state(), SubscriberState::Stopped);
    }
}

fn create_request() -> CreateAccountRequest {
    CreateAccountRequest {
        holder_name: "Alice".to_string(),
        country_code: "US".to_string(),
    }
}

#[tokio::test]
async fn account_lifecycle_drives_card_issuance() {
    let pipeline = Pipeline::start();

    // Create an account; its status replicates into the card service.
    let account = pipeline.accounts.create(create_request()).await.unwrap();
    pipeline.settle().await;

    // Issuance succeeds for the replicated ACTIVE status.
    let card = pipeline
        .cards
        .issue(CreateCardRequest {
            country: "US".to_string(),
            account_id: account.id.to_string(),
        })
        .await
        .unwrap();
    assert!(card.card_number.starts_with("US-"));
    assert!(!card.deleted);

    // Soft-delete the account; the deletion replicates too.
    pipeline.accounts.delete(account.id).await.unwrap();
    pipeline.settle().await;

    let second = pipeline
        .cards
        .issue(CreateCardRequest {
            country: "US".to_string(),
            account_id: account.id.to_string(),
        })
        .await;
    assert!(matches!(
        second,
        Err(ServiceError::Domain(DomainError::AccountDeleted(_)))
    ));

    // The card issued while the account was active is untouched.
    assert!(!pipeline.cards.get_by_id(card.id).await.unwrap().deleted);

    pipeline.shutdown().await;
}

#[tokio::test]
async fn blocked_account_rejects_issuance_until_reactivated() {
    let pipeline = Pipeline::start();

    let account = pipeline.accounts.create(create_request()).await.unwrap();
    pipeline.settle().await;

    pipeline
        .accounts
        .update(
            account.id,
            UpdateAccountRequest {
                status: Some(AccountStatus::Blocked),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    pipeline.settle().await;

    let blocked = pipeline
        .cards
        .issue(CreateCardRequest {
            country: "ES".to_string(),
            account_id: account.id.to_string(),
        })
        .await;
    assert!(matches!(
        blocked,
        Err(ServiceError::Domain(DomainError::AccountInactive(_)))
    ));

    pipeline
        .accounts
        .update(
            account.id,
            UpdateAccountRequest {
                status: Some(AccountStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    pipeline.settle().await;

    let card = pipeline
        .cards
        .issue(CreateCardRequest {
            country: "ES".to_string(),
            account_id: account.id.to_string(),
        })
        .await
        .unwrap();
    assert!(card.card_number.starts_with("ES-"));

    pipeline.shutdown().await;
}

#[tokio::test]
async fn issuance_for_unreplicated_account_is_rejected() {
    let pipeline = Pipeline::start();

    // Created directly in the account store, but the pipeline has not
    // settled yet, so the card service does not know the account.
    let account = pipeline.accounts.create(create_request()).await.unwrap();

    let result = pipeline
        .cards
        .issue(CreateCardRequest {
            country: "US".to_string(),
            account_id: account.id.to_string(),
        })
        .await;

    // Either outcome is possible under eventual consistency, but after
    // settling the issuance must succeed.
    if let Err(err) = result {
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::AccountNotFound(_))
        ));
    }

    pipeline.settle().await;
    pipeline
        .cards
        .issue(CreateCardRequest {
            country: "US".to_string(),
            account_id: account.id.to_string(),
        })
        .await
        .unwrap();

    pipeline.shutdown().await;
}
