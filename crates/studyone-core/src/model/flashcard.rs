use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repo::Entity;
use crate::storage::keys;

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    #[serde(default)]
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A deck owning an ordered list of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            name: name.into(),
            description: None,
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card with the given id. Returns false if absent.
    pub fn remove_card(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != card_id);
        self.cards.len() < before
    }
}

impl Entity for Deck {
    const KEY: &'static str = keys::DECKS;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_keep_insertion_order() {
        let mut deck = Deck::new("Latin");
        deck.add_card(Card::new("aqua", "water"));
        deck.add_card(Card::new("ignis", "fire"));
        assert_eq!(deck.cards[0].front, "aqua");
        assert_eq!(deck.cards[1].front, "ignis");
    }

    #[test]
    fn remove_card_by_id() {
        let mut deck = Deck::new("Latin");
        deck.add_card(Card::new("aqua", "water"));
        let id = deck.cards[0].id.clone();
        assert!(deck.remove_card(&id));
        assert!(deck.cards.is_empty());
        assert!(!deck.remove_card(&id));
    }
}
