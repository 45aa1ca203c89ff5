//! Replicated account status, owned by the card service.

use serde::{Deserialize, Serialize};

use super::account::{AccountId, AccountStatus};

/// A minimal replica of an account, used only for card-issuance
/// eligibility checks.
///
/// Not authoritative: it may lag behind the account service at any
/// instant and carries no timestamps - it is a pure latest-value replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatusEntry {
    pub account_id: AccountId,
    pub status: AccountStatus,
}

impl AccountStatusEntry {
    pub fn new(account_id: AccountId, status: AccountStatus) -> Self {
        Self { account_id, status }
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn is_deleted(&self) -> bool {
        self.status == AccountStatus::Deleted
    }
}
