//! Card service binary.
//!
//! Owns the card store and the account-status cache, and runs the
//! subscriber that keeps the cache in step with the account service.
//! If Kafka is unreachable or unconfigured the server still starts; the
//! cache just stays empty, so every issuance is rejected as unknown.

use std::sync::Arc;
use std::time::Duration;

use cardpay_app::config::CardConfig;
use cardpay_broker::{AccountStatusSubscriber, KafkaEventSource};
use cardpay_hex::{CardService, inbound};
use cardpay_repo::{MemoryCardStore, MemoryStatusCache};

/// Bound on how long shutdown waits for the subscriber to drain.
const SUBSCRIBER_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    cardpay_app::init_tracing();

    let config = CardConfig::from_env()?;
    tracing::info!("Starting card server on port {}", config.port);

    let statuses = Arc::new(MemoryStatusCache::new());

    let subscriber = match &config.broker {
        Some(broker) => match KafkaEventSource::new(broker) {
            Ok(source) => {
                tracing::info!(
                    brokers = %broker.bootstrap_servers,
                    topic = %broker.topic,
                    group = %broker.group_id,
                    "Kafka consumer connected"
                );
                let subscriber = AccountStatusSubscriber::new(source, statuses.clone());
                let handle = subscriber.handle();
                let worker = tokio::spawn(subscriber.run());
                Some((handle, worker))
            }
            Err(err) => {
                tracing::warn!(%err, "Kafka unavailable, continuing without a subscriber");
                None
            }
        },
        None => {
            tracing::warn!("KAFKA_BROKERS not set, continuing without a subscriber");
            None
        }
    };

    let service = CardService::new(MemoryCardStore::new(), statuses);
    let router = inbound::card::router(service);

    let addr = format!("0.0.0.0:{}", config.port);
    inbound::serve(router, &addr).await?;

    if let Some((handle, worker)) = subscriber {
        handle.stop();
        if tokio::time::timeout(SUBSCRIBER_GRACE, worker).await.is_err() {
            tracing::warn!("subscriber did not stop within the grace period, abandoning it");
        }
    }

    Ok(())
}
