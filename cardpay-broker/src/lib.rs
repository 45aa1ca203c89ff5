//! # Cardpay Broker
//!
//! Broker adapters for the account-status replication pipeline:
//!
//! - `kafka` - the real transport: a [`rdkafka`] producer publishing the
//!   event envelope to one topic, and a consumer-group source reading it.
//! - `channel` - an in-process stand-in over a tokio channel, used in
//!   tests and single-process setups without a broker.
//! - `subscriber` - the long-running worker that applies received events
//!   to the card service's account-status cache.
//!
//! The publisher and subscriber share no memory, only the wire format
//! defined in `cardpay-types`.

pub mod channel;
pub mod kafka;
pub mod source;
pub mod subscriber;

pub use channel::{ChannelBroker, ChannelPublisher, ChannelSource};
pub use kafka::{BrokerConfig, KafkaAccountPublisher, KafkaEventSource};
pub use source::{EventSource, SourceError};
pub use subscriber::{AccountStatusSubscriber, SubscriberHandle, SubscriberState};
