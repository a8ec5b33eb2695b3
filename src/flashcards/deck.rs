//! Deck walker
//!
//! Cursor over a flashcard deck: flip the current card, step forward or back
//! with wraparound. Stepping always lands on the question side.

use crate::storage::{Result, StorageError};

use super::models::Flashcard;

#[derive(Debug)]
pub struct DeckWalker {
    cards: Vec<Flashcard>,
    current_index: usize,
    flipped: bool,
}

impl DeckWalker {
    pub fn new(cards: Vec<Flashcard>) -> Result<Self> {
        if cards.is_empty() {
            return Err(StorageError::InvalidOperation(
                "a deck needs at least one card".to_string(),
            ));
        }
        Ok(Self {
            cards,
            current_index: 0,
            flipped: false,
        })
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.current_index]
    }

    /// 1-based position for "Card 2 of 10" displays
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.cards.len())
    }

    /// Whether the answer side is showing
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) {
        self.flipped = false;
        self.current_index = (self.current_index + 1) % self.cards.len();
    }

    pub fn prev(&mut self) {
        self.flipped = false;
        self.current_index = (self.current_index + self.cards.len() - 1) % self.cards.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::models::starter_deck;

    #[test]
    fn test_empty_deck_rejected() {
        assert!(DeckWalker::new(Vec::new()).is_err());
    }

    #[test]
    fn test_flip_toggles() {
        let mut deck = DeckWalker::new(starter_deck()).unwrap();
        assert!(!deck.is_flipped());
        deck.flip();
        assert!(deck.is_flipped());
        deck.flip();
        assert!(!deck.is_flipped());
    }

    #[test]
    fn test_next_wraps_and_unflips() {
        let cards = starter_deck();
        let len = cards.len();
        let mut deck = DeckWalker::new(cards).unwrap();

        deck.flip();
        for _ in 0..len {
            deck.next();
        }

        assert_eq!(deck.position(), (1, len));
        assert!(!deck.is_flipped());
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let cards = starter_deck();
        let len = cards.len();
        let mut deck = DeckWalker::new(cards).unwrap();

        deck.prev();
        assert_eq!(deck.position(), (len, len));
    }
}
