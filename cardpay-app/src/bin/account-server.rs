//! Account service binary.
//!
//! Owns the account store and publishes lifecycle events to the broker.
//! If Kafka is unreachable or unconfigured the server still starts; it
//! just runs without a publisher.

use std::sync::Arc;

use cardpay_app::config::AccountConfig;
use cardpay_broker::KafkaAccountPublisher;
use cardpay_hex::{AccountService, inbound};
use cardpay_repo::MemoryAccountStore;
use cardpay_types::AccountEventPublisher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    cardpay_app::init_tracing();

    let config = AccountConfig::from_env()?;
    tracing::info!("Starting account server on port {}", config.port);

    let publisher: Option<Arc<dyn AccountEventPublisher>> = match &config.broker {
        Some(broker) => match KafkaAccountPublisher::new(broker) {
            Ok(publisher) => {
                tracing::info!(
                    brokers = %broker.bootstrap_servers,
                    topic = %broker.topic,
                    "Kafka publisher connected"
                );
                Some(Arc::new(publisher))
            }
            Err(err) => {
                tracing::warn!(%err, "Kafka unavailable, continuing without a publisher");
                None
            }
        },
        None => {
            tracing::warn!("KAFKA_BROKERS not set, continuing without a publisher");
            None
        }
    };

    let service = AccountService::new(MemoryAccountStore::new(), publisher);
    let router = inbound::account::router(service);

    let addr = format!("0.0.0.0:{}", config.port);
    inbound::serve(router, &addr).await?;

    Ok(())
}
