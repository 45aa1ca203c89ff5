//! Card domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;
use crate::error::DomainError;

/// Unique identifier for a Card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Creates a new random CardId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CardId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A payment card owned by the card service.
///
/// `account_id` points into the account service's domain and is never
/// dereferenced directly - eligibility is resolved through the local
/// status cache at issuance time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Derived from the country code plus a random suffix, unique
    pub card_number: String,
    pub country: String,
    pub account_id: AccountId,
    /// One-way flag: a deleted card stays queryable but cannot be undeleted
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new, non-deleted card.
    ///
    /// # Validation
    /// - Card number and country cannot be empty
    pub fn new(
        card_number: String,
        country: String,
        account_id: AccountId,
    ) -> Result<Self, DomainError> {
        if card_number.trim().is_empty() {
            return Err(DomainError::Validation("card number is required".into()));
        }
        if country.trim().is_empty() {
            return Err(DomainError::CountryRequired);
        }

        Ok(Self {
            id: CardId::new(),
            card_number,
            country,
            account_id,
            deleted: false,
            created_at: Utc::now(),
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Marks the card as deleted (soft delete).
    pub fn mark_deleted(&mut self) -> Result<(), DomainError> {
        if self.deleted {
            return Err(DomainError::CardAlreadyDeleted);
        }
        self.deleted = true;
        Ok(())
    }
}
