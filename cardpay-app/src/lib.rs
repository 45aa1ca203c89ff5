//! # Cardpay Application
//!
//! Wiring shared by the two server binaries:
//! - Load configuration from environment
//! - Initialize the tracing subscriber
//! - Build the stores, services, and broker adapters per binary

pub mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter when set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cardpay_app=debug,cardpay_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
