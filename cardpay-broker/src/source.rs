//! Transport seam for the status subscriber.

use async_trait::async_trait;

/// Error type for receive operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("broker receive failed: {0}")]
    Transport(String),

    #[error("event source closed")]
    Closed,
}

/// A stream of raw event payloads from the broker.
///
/// `recv` blocks until the next message arrives; cancellation happens in
/// the caller's select loop, so implementations do not need their own.
#[async_trait]
pub trait EventSource: Send + Sync + 'static {
    async fn recv(&self) -> Result<Vec<u8>, SourceError>;
}
