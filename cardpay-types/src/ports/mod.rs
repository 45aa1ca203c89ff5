//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod publisher;
mod repository;

pub use publisher::{AccountEventPublisher, PublishError};
pub use repository::{AccountRepository, AccountStatusCache, CardRepository};
