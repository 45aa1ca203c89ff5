//! Card application service.
//!
//! Issuance eligibility is decided from the local account-status cache,
//! never by calling the account service. This is the one place where the
//! eventual-consistency trade-off is observable: the decision reflects
//! the cache's last known state, not the account service's live state.

use std::sync::Arc;

use uuid::Uuid;

use cardpay_types::{
    AccountId, AccountStatusCache, Card, CardId, CardListResponse, CardRepository, CardResponse,
    CreateCardRequest, DomainError, RepoError, ServiceError,
};

/// Application service for card operations.
pub struct CardService<CR: CardRepository, AC: AccountStatusCache> {
    cards: CR,
    statuses: Arc<AC>,
}

impl<CR: CardRepository, AC: AccountStatusCache> CardService<CR, AC> {
    pub fn new(cards: CR, statuses: Arc<AC>) -> Self {
        Self { cards, statuses }
    }

    /// Issues a new card for an account that the cache currently knows
    /// as ACTIVE.
    ///
    /// The three rejection reasons stay distinct: unknown account,
    /// deleted account, and any other non-active status.
    pub async fn issue(&self, req: CreateCardRequest) -> Result<CardResponse, ServiceError> {
        if req.country.trim().is_empty() {
            return Err(DomainError::CountryRequired.into());
        }
        if req.account_id.trim().is_empty() {
            return Err(DomainError::AccountIdRequired.into());
        }
        let account_id: AccountId = req
            .account_id
            .parse()
            .map_err(|_| DomainError::Validation("account ID is not a valid UUID".into()))?;

        let entry = match self.statuses.get_by_id(account_id).await {
            Ok(entry) => entry,
            Err(RepoError::NotFound) => {
                return Err(DomainError::AccountNotFound(account_id).into());
            }
            Err(other) => return Err(other.into()),
        };
        if entry.is_deleted() {
            return Err(DomainError::AccountDeleted(account_id).into());
        }
        if !entry.is_active() {
            return Err(DomainError::AccountInactive(account_id).into());
        }

        let card = Card::new(generate_card_number(&req.country), req.country, account_id)?;
        self.cards.create(card.clone()).await?;

        tracing::info!(card_id = %card.id, account_id = %account_id, "card issued");
        Ok((&card).into())
    }

    /// Gets a card by ID, deleted cards included.
    pub async fn get_by_id(&self, id: CardId) -> Result<CardResponse, ServiceError> {
        let card = self.cards.get_by_id(id).await?;
        Ok((&card).into())
    }

    /// Gets a card by its card number.
    pub async fn get_by_number(&self, card_number: &str) -> Result<CardResponse, ServiceError> {
        let card = self.cards.get_by_number(card_number).await?;
        Ok((&card).into())
    }

    /// Lists the cards referencing an account; an empty list is a valid
    /// answer, not an error.
    pub async fn get_by_account(&self, account_id: &str) -> Result<CardListResponse, ServiceError> {
        if account_id.trim().is_empty() {
            return Err(DomainError::AccountIdRequired.into());
        }
        let account_id: AccountId = account_id
            .parse()
            .map_err(|_| DomainError::Validation("account ID is not a valid UUID".into()))?;

        let cards = self.cards.get_by_account_id(account_id).await?;
        Ok(cards.as_slice().into())
    }

    /// Lists all cards, deleted ones included.
    pub async fn list(&self) -> Result<CardListResponse, ServiceError> {
        let cards = self.cards.list().await?;
        Ok(cards.as_slice().into())
    }

    /// Soft-deletes a card. Deleting twice fails with a conflict.
    pub async fn delete(&self, id: CardId) -> Result<(), ServiceError> {
        let mut card = self.cards.get_by_id(id).await?;

        card.mark_deleted()?;

        self.cards.delete(id).await?;
        Ok(())
    }
}

/// Card number: country code plus a short random suffix. A truncated
/// v4 UUID keeps the collision probability negligible at this scale.
fn generate_card_number(country: &str) -> String {
    let suffix = Uuid::new_v4().to_string();
    format!("{}-{}", country, &suffix[..8])
}
