//! Data models for the spaced-repetition reviewer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of content the card holds (affects rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    Text,
    Code,
}

impl Default for CardKind {
    fn default() -> Self {
        Self::Text
    }
}

/// A memory card scheduled for periodic review
///
/// Invariants: `interval_days >= 1` at all times; `next_review` is always a
/// concrete instant. Cards are created by explicit user action and mutated
/// only by [`apply_outcome`](super::algorithm::apply_outcome) via the store;
/// there is no delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCard {
    pub id: Uuid,
    /// Question side
    pub front: String,
    /// Answer side
    pub back: String,
    /// When the card next comes due
    pub next_review: DateTime<Utc>,
    /// Current interval in days
    #[serde(default = "default_interval")]
    pub interval_days: i64,
    #[serde(default)]
    pub kind: CardKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_interval() -> i64 {
    1
}

impl MemoryCard {
    /// Create a new card, due immediately
    pub fn new(front: String, back: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            front,
            back,
            next_review: now,
            interval_days: 1,
            kind: CardKind::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check whether the card is due at the given instant
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

/// User-reported recall difficulty after seeing a card's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewOutcome {
    /// Forgot it: start over at one day
    Hard,
    /// Remembered with effort: keep the current interval
    Good,
    /// Remembered easily: double the interval
    Easy,
}

/// Counts shown on the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub due_cards: usize,
}
