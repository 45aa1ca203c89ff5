//! Configuration loading from environment.

use std::env;

use cardpay_broker::BrokerConfig;

/// Configuration for the account server.
pub struct AccountConfig {
    pub port: u16,
    /// `None` when `KAFKA_BROKERS` is unset: the server runs without a
    /// publisher and account events are simply not emitted.
    pub broker: Option<BrokerConfig>,
}

impl AccountConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()?;

        Ok(Self {
            port,
            broker: broker_from_env("account-service"),
        })
    }
}

/// Configuration for the card server.
pub struct CardConfig {
    pub port: u16,
    /// `None` when `KAFKA_BROKERS` is unset: the server runs without a
    /// subscriber and the status cache stays empty.
    pub broker: Option<BrokerConfig>,
}

impl CardConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8082".to_string())
            .parse()?;

        Ok(Self {
            port,
            broker: broker_from_env("card-service"),
        })
    }
}

fn broker_from_env(default_group: &str) -> Option<BrokerConfig> {
    let bootstrap_servers = env::var("KAFKA_BROKERS").ok()?;

    Some(BrokerConfig {
        bootstrap_servers,
        topic: env::var("KAFKA_TOPIC").unwrap_or_else(|_| "account-events".to_string()),
        group_id: env::var("KAFKA_GROUP_ID").unwrap_or_else(|_| default_group.to_string()),
    })
}
