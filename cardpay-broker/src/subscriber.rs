//! Background worker replicating account statuses into the local cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio_util::sync::CancellationToken;

use cardpay_types::{AccountEvent, AccountStatusCache, AccountStatusEntry};

use crate::source::{EventSource, SourceError};

/// Lifecycle of a subscriber instance.
///
/// `Idle -> Running -> Stopping -> Stopped`, with no way back to
/// `Running`: a stopped subscriber is replaced, not restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SubscriberState {
    Idle = 0,
    Running = 1,
    Stopping = 2,
    Stopped = 3,
}

impl SubscriberState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => SubscriberState::Idle,
            1 => SubscriberState::Running,
            2 => SubscriberState::Stopping,
            _ => SubscriberState::Stopped,
        }
    }
}

/// Handle for observing and stopping a running subscriber.
///
/// `stop` is safe to call more than once; the owning binary bounds the
/// join with a grace period so shutdown never hangs on the broker.
#[derive(Clone)]
pub struct SubscriberHandle {
    token: CancellationToken,
    state: Arc<AtomicU8>,
}

impl SubscriberHandle {
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn state(&self) -> SubscriberState {
        SubscriberState::from_u8(self.state.load(Ordering::SeqCst))
    }
}

/// Continuously reads envelopes from the broker and applies them to the
/// account-status cache, one at a time.
///
/// Tolerated without crashing: malformed payloads (skip, log, continue),
/// duplicate events (upsert is idempotent), reordered events (last write
/// for an ID wins), and events for account IDs this service has never
/// seen (upserted unconditionally - the subscriber has no authority to
/// reject).
pub struct AccountStatusSubscriber<S, C> {
    source: S,
    cache: Arc<C>,
    token: CancellationToken,
    state: Arc<AtomicU8>,
}

impl<S: EventSource, C: AccountStatusCache> AccountStatusSubscriber<S, C> {
    pub fn new(source: S, cache: Arc<C>) -> Self {
        Self {
            source,
            cache,
            token: CancellationToken::new(),
            state: Arc::new(AtomicU8::new(SubscriberState::Idle as u8)),
        }
    }

    pub fn handle(&self) -> SubscriberHandle {
        SubscriberHandle {
            token: self.token.clone(),
            state: self.state.clone(),
        }
    }

    fn set_state(&self, state: SubscriberState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    /// Consumes the subscriber and runs until cancelled or the source
    /// closes. A single bad message never halts replication.
    pub async fn run(self) {
        self.set_state(SubscriberState::Running);
        tracing::info!("account status subscriber started");

        loop {
            tokio::select! {
                _ = self.token.cancelled() => {
                    tracing::info!("cancellation requested, stopping subscriber");
                    break;
                }
                received = self.source.recv() => match received {
                    Ok(payload) => self.apply(&payload).await,
                    Err(SourceError::Closed) => {
                        tracing::info!("event source closed, stopping subscriber");
                        break;
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to receive account event");
                    }
                },
            }
        }

        self.set_state(SubscriberState::Stopping);
        // The select loop only exits once the in-flight receive has
        // resolved or been cancelled; nothing is left to drain.
        self.set_state(SubscriberState::Stopped);
        tracing::info!("account status subscriber stopped");
    }

    async fn apply(&self, payload: &[u8]) {
        let event: AccountEvent = match serde_json::from_slice(payload) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, "skipping malformed account event");
                return;
            }
        };

        let entry = AccountStatusEntry::new(event.account_id, event.status);
        if let Err(err) = self.cache.upsert(entry).await {
            tracing::warn!(%err, account_id = %event.account_id, "failed to update status cache");
            return;
        }

        tracing::debug!(
            kind = %event.kind,
            account_id = %event.account_id,
            status = %event.status,
            "account status replicated"
        );
    }
}
