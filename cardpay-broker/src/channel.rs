//! In-process broker over a tokio channel.
//!
//! Stands in for Kafka in tests and single-process setups: same envelope
//! on the wire, same publisher and source contracts, no network.

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use cardpay_types::{AccountEvent, AccountEventPublisher, AccountId, AccountStatus, PublishError};

use crate::source::{EventSource, SourceError};

/// Factory for a connected publisher/source pair.
pub struct ChannelBroker;

impl ChannelBroker {
    pub fn new(capacity: usize) -> (ChannelPublisher, ChannelSource) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            ChannelPublisher { tx },
            ChannelSource {
                rx: Mutex::new(rx),
            },
        )
    }
}

/// Publisher half of the in-process broker.
#[derive(Clone)]
pub struct ChannelPublisher {
    tx: mpsc::Sender<Vec<u8>>,
}

impl ChannelPublisher {
    async fn publish(&self, event: AccountEvent) -> Result<(), PublishError> {
        let payload =
            serde_json::to_vec(&event).map_err(|e| PublishError::Serialize(e.to_string()))?;
        self.send_raw(payload).await
    }

    /// Injects an arbitrary payload, malformed ones included.
    pub async fn send_raw(&self, payload: Vec<u8>) -> Result<(), PublishError> {
        self.tx
            .send(payload)
            .await
            .map_err(|_| PublishError::Transport("channel closed".into()))
    }
}

#[async_trait]
impl AccountEventPublisher for ChannelPublisher {
    async fn publish_created(
        &self,
        account_id: AccountId,
        status: AccountStatus,
    ) -> Result<(), PublishError> {
        self.publish(AccountEvent::created(account_id, status)).await
    }

    async fn publish_status_changed(
        &self,
        account_id: AccountId,
        status: AccountStatus,
    ) -> Result<(), PublishError> {
        self.publish(AccountEvent::status_changed(account_id, status))
            .await
    }
}

/// Source half of the in-process broker.
pub struct ChannelSource {
    rx: Mutex<mpsc::Receiver<Vec<u8>>>,
}

#[async_trait]
impl EventSource for ChannelSource {
    async fn recv(&self) -> Result<Vec<u8>, SourceError> {
        self.rx.lock().await.recv().await.ok_or(SourceError::Closed)
    }
}
