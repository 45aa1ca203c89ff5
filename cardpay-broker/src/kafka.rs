//! Kafka transport adapters.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::Message;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord};

use cardpay_types::{AccountEvent, AccountEventPublisher, AccountId, AccountStatus, PublishError};

use crate::source::{EventSource, SourceError};

/// Connection settings for the account-events topic.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub bootstrap_servers: String,
    pub topic: String,
    /// One consumer group per service deployment, so instances share the
    /// stream without processing the same message twice across the group.
    pub group_id: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            bootstrap_servers: "localhost:9092".to_string(),
            topic: "account-events".to_string(),
            group_id: "card-service".to_string(),
        }
    }
}

/// Publishes account lifecycle events to a single Kafka topic.
///
/// At-least-once semantics come from the broker client; callers treat
/// every publish as best-effort and never roll back on failure.
pub struct KafkaAccountPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaAccountPublisher {
    pub fn new(config: &BrokerConfig) -> Result<Self, KafkaError> {
        let producer = ClientConfig::new()
            .set("bootstrap.servers", &config.bootstrap_servers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
        })
    }

    async fn publish(&self, event: AccountEvent) -> Result<(), PublishError> {
        let payload =
            serde_json::to_vec(&event).map_err(|e| PublishError::Serialize(e.to_string()))?;

        // No partition key: the balancer may distribute freely.
        let record = FutureRecord::<(), _>::to(&self.topic).payload(&payload);
        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(err, _msg)| PublishError::Transport(err.to_string()))?;

        tracing::debug!(
            kind = %event.kind,
            account_id = %event.account_id,
            status = %event.status,
            "published account event"
        );
        Ok(())
    }
}

#[async_trait]
impl AccountEventPublisher for KafkaAccountPublisher {
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

/// Reads raw event payloads from the account-events topic as part of a
/// consumer group.
pub struct KafkaEventSource {
    consumer: StreamConsumer,
}

impl KafkaEventSource {
    pub fn new(config: &BrokerConfig) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.bootstrap_servers)
            .set("group.id", &config.group_id)
            .set("auto.offset.reset", "earliest")
            .set("enable.auto.commit", "true")
            .set("session.timeout.ms", "6000")
            .create()?;

        consumer.subscribe(&[config.topic.as_str()])?;

        Ok(Self { consumer })
    }
}

#[async_trait]
impl EventSource for KafkaEventSource {
    async fn recv(&self) -> Result<Vec<u8>, SourceError> {
        let message = self
            .consumer
            .recv()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        Ok(message.payload().unwrap_or_default().to_vec())
    }
}
