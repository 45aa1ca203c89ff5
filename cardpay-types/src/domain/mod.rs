//! Domain models for the account and card services.

pub mod account;
pub mod card;
pub mod status_cache;

pub use account::{Account, AccountId, AccountStatus};
pub use card::{Card, CardId};
pub use status_cache::AccountStatusEntry;
