//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountId, AccountStatus, Card, CardId};

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new account.
///
/// ID and account number are generated by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub holder_name: String,
    pub country_code: String,
}

/// Request to update an existing account. Absent fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

/// Response for account operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub account_number: String,
    pub holder_name: String,
    pub country_code: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number.clone(),
            holder_name: account.holder_name.clone(),
            country_code: account.country_code.clone(),
            status: account.status,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// A list of accounts plus its count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountResponse>,
    pub total: usize,
}

impl From<&[Account]> for AccountListResponse {
    fn from(accounts: &[Account]) -> Self {
        let accounts: Vec<AccountResponse> = accounts.iter().map(Into::into).collect();
        let total = accounts.len();
        Self { accounts, total }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Card DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to issue a new card.
///
/// `account_id` is kept as a raw string so the service can distinguish
/// "missing" from "malformed" when validating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub country: String,
    pub account_id: String,
}

/// Response for card operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: CardId,
    pub card_number: String,
    pub country: String,
    pub account_id: AccountId,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            card_number: card.card_number.clone(),
            country: card.country.clone(),
            account_id: card.account_id,
            deleted: card.deleted,
            created_at: card.created_at,
        }
    }
}

/// A list of cards plus its count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<CardResponse>,
    pub total: usize,
}

impl From<&[Card]> for CardListResponse {
    fn from(cards: &[Card]) -> Self {
        let cards: Vec<CardResponse> = cards.iter().map(Into::into).collect();
        let total = cards.len();
        Self { cards, total }
    }
}
