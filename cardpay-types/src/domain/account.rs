//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for an Account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random AccountId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AccountId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the all-zero placeholder UUID.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Lifecycle status of an account.
///
/// `Deleted` is terminal in the canonical store (soft delete), but the
/// status cache on the card side may hold any value at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Blocked,
    Deleted,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Blocked => "BLOCKED",
            AccountStatus::Deleted => "DELETED",
        };
        f.write_str(s)
    }
}

/// A customer account owned by the account service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Customer-facing account number, unique and never reused
    pub account_number: String,
    /// Name of the account holder
    pub holder_name: String,
    /// ISO country code of the account
    pub country_code: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new ACTIVE account.
    ///
    /// # Validation
    /// - Account number, holder name and country code cannot be empty
    pub fn new(
        account_number: String,
        holder_name: String,
        country_code: String,
    ) -> Result<Self, DomainError> {
        if account_number.trim().is_empty()
            || holder_name.trim().is_empty()
            || country_code.trim().is_empty()
        {
            return Err(DomainError::Validation(
                "account number, holder name and country code are required".into(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: AccountId::new(),
            account_number,
            holder_name,
            country_code,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn is_deleted(&self) -> bool {
        self.status == AccountStatus::Deleted
    }

    pub fn is_blocked(&self) -> bool {
        self.status == AccountStatus::Blocked
    }

    /// Soft delete: the record stays, only the status flips.
    pub fn mark_deleted(&mut self) {
        self.status = AccountStatus::Deleted;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account =
            Account::new("ACC-001".to_string(), "Alice".to_string(), "US".to_string()).unwrap();
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.is_active());
        assert_eq!(account.account_number, "ACC-001");
    }

    #[test]
    fn test_empty_holder_name_fails() {
        let result = Account::new("ACC-001".to_string(), "  ".to_string(), "US".to_string());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_mark_deleted_keeps_record() {
        let mut account =
            Account::new("ACC-001".to_string(), "Alice".to_string(), "US".to_string()).unwrap();
        let created = account.created_at;
        account.mark_deleted();
        assert!(account.is_deleted());
        assert_eq!(account.created_at, created);
        assert_eq!(account.account_number, "ACC-001");
    }

    #[test]
    fn test_status_wire_spelling() {
        let json = serde_json::to_string(&AccountStatus::Blocked).unwrap();
        assert_eq!(json, "\"BLOCKED\"");
        let back: AccountStatus = serde_json::from_str("\"DELETED\"").unwrap();
        assert_eq!(back, AccountStatus::Deleted);
    }
}
