//! In-memory card store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cardpay_types::{AccountId, Card, CardId, CardRepository, RepoError};

/// In-memory implementation of [`CardRepository`].
#[derive(Default)]
pub struct MemoryCardStore {
    cards: RwLock<HashMap<CardId, Card>>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardRepository for MemoryCardStore {
    async fn create(&self, card: Card) -> Result<(), RepoError> {
        let mut cards = self.cards.write().await;

        if cards.contains_key(&card.id) {
            return Err(RepoError::DuplicateId);
        }

        cards.insert(card.id, card);
        Ok(())
    }

    async fn get_by_id(&self, id: CardId) -> Result<Card, RepoError> {
        self.cards
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn get_by_number(&self, card_number: &str) -> Result<Card, RepoError> {
        self.cards
            .read()
            .await
            .values()
            .find(|c| c.card_number == card_number)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn get_by_account_id(&self, account_id: AccountId) -> Result<Vec<Card>, RepoError> {
        Ok(self
            .cards
            .read()
            .await
            .values()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: CardId) -> Result<(), RepoError> {
        let mut cards = self.cards.write().await;

        let card = cards.get_mut(&id).ok_or(RepoError::NotFound)?;
        card.deleted = true;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Card>, RepoError> {
        Ok(self.cards.read().await.values().cloned().collect())
    }
}
