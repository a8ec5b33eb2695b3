//! Card store
//!
//! All memory cards live in one JSON document (`cards.json`), read once when
//! the store opens and rewritten after every successful mutation. Mutation is
//! funneled through `apply_review`, the single update entry point, so the rest
//! of the crate only ever reads.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::algorithm::apply_outcome;
use super::models::{MemoryCard, ReviewOutcome, ReviewStats};

pub struct CardStore {
    cards_path: PathBuf,
    cards: Vec<MemoryCard>,
}

impl CardStore {
    /// Open the store, loading any persisted cards
    ///
    /// Malformed persisted state is logged and treated as "no cards"; it never
    /// surfaces to the caller.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        let cards_path = data_dir.join("cards.json");

        let cards = if cards_path.exists() {
            let content = fs::read_to_string(&cards_path)?;
            match serde_json::from_str(&content) {
                Ok(cards) => cards,
                Err(e) => {
                    warn!("cards.json is corrupted, starting empty: {}", e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self { cards_path, cards })
    }

    /// All cards, in insertion order
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn get_card(&self, id: Uuid) -> Result<&MemoryCard> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or(StorageError::CardNotFound(id))
    }

    /// Add a card, due immediately
    ///
    /// A card with an empty (or whitespace-only) front or back is silently
    /// ignored: no card is created and the store is left unchanged.
    pub fn add_card(
        &mut self,
        front: &str,
        back: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<MemoryCard>> {
        if front.trim().is_empty() || back.trim().is_empty() {
            debug!("ignoring card with empty front or back");
            return Ok(None);
        }

        let card = MemoryCard::new(front.to_string(), back.to_string(), now);
        self.cards.push(card.clone());
        self.save()?;
        Ok(Some(card))
    }

    /// Cards whose next-review instant has passed, in store order
    pub fn due_cards(&self, now: DateTime<Utc>) -> Vec<&MemoryCard> {
        self.cards.iter().filter(|c| c.is_due(now)).collect()
    }

    /// Apply a review outcome to a card's schedule
    ///
    /// Recomputes `{interval_days, next_review}` and persists the store.
    pub fn apply_review(
        &mut self,
        card_id: Uuid,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Result<MemoryCard> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(StorageError::CardNotFound(card_id))?;

        let update = apply_outcome(card.interval_days, outcome, now);
        card.interval_days = update.interval_days;
        card.next_review = update.next_review;
        card.updated_at = now;
        let updated = card.clone();

        self.save()?;
        Ok(updated)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ReviewStats {
        ReviewStats {
            total_cards: self.cards.len(),
            due_cards: self.due_cards(now).len(),
        }
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.cards)?;
        fs::write(&self.cards_path, json)?;
        Ok(())
    }
}
