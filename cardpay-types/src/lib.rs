//! # Cardpay Types
//!
//! Domain types and port traits shared by the account and card services.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Account, Card, AccountStatusEntry)
//! - `ports/` - Trait definitions that adapters must implement
//! - `event/` - The account lifecycle event envelope on the wire
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod event;
pub mod ports;

// Re-export commonly used types
pub use domain::{Account, AccountId, AccountStatus, AccountStatusEntry, Card, CardId};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError, ServiceError};
pub use event::{AccountEvent, AccountEventKind};
pub use ports::{
    AccountEventPublisher, AccountRepository, AccountStatusCache, CardRepository, PublishError,
};
