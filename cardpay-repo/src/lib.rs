//! # Cardpay Repo
//!
//! Concrete repository implementations (adapters) for the account and
//! card services. The reference stores are in-memory maps, each guarded
//! by a single readers-writer lock: reads proceed concurrently, writes
//! are exclusive, and the lock is released on every exit path. Within a
//! store all operations are linearizable; nothing here blocks on IO.

pub mod account;
pub mod card;
pub mod status_cache;

#[cfg(test)]
mod memory_tests;

pub use account::MemoryAccountStore;
pub use card::MemoryCardStore;
pub use status_cache::MemoryStatusCache;
