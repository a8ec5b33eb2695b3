//! Review session state machine
//!
//! A session walks one due card through question → answer → outcome. There is
//! no timeout: the session holds its state until the user acts.

use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::models::{MemoryCard, ReviewOutcome};

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    QuestionShown,
    AnswerShown,
}

/// Drives a single card through a review
///
/// Transitions: `start` (Idle → QuestionShown), `reveal` (QuestionShown →
/// AnswerShown), `resolve` (AnswerShown → Idle, yielding the card id and the
/// outcome for the store to apply). Out-of-order calls are rejected.
#[derive(Debug)]
pub struct ReviewSession {
    state: SessionState,
    card: Option<MemoryCard>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            card: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The card under review, if any
    pub fn current(&self) -> Option<&MemoryCard> {
        self.card.as_ref()
    }

    /// Begin reviewing a card, showing its front
    pub fn start(&mut self, card: MemoryCard) -> Result<&MemoryCard> {
        if self.state != SessionState::Idle {
            return Err(StorageError::InvalidOperation(
                "a review is already in progress".to_string(),
            ));
        }
        self.state = SessionState::QuestionShown;
        Ok(self.card.insert(card))
    }

    /// Flip the card, showing its back
    pub fn reveal(&mut self) -> Result<&MemoryCard> {
        if self.state != SessionState::QuestionShown {
            return Err(StorageError::InvalidOperation(
                "no question is showing".to_string(),
            ));
        }
        self.state = SessionState::AnswerShown;
        self.card.as_ref().ok_or_else(|| {
            StorageError::InvalidOperation("no card under review".to_string())
        })
    }

    /// Record the outcome and return to idle
    ///
    /// Returns the card id and outcome; the caller hands them to
    /// `CardStore::apply_review`.
    pub fn resolve(&mut self, outcome: ReviewOutcome) -> Result<(Uuid, ReviewOutcome)> {
        if self.state != SessionState::AnswerShown {
            return Err(StorageError::InvalidOperation(
                "the answer has not been revealed".to_string(),
            ));
        }
        let card = self.card.take().ok_or_else(|| {
            StorageError::InvalidOperation("no card under review".to_string())
        })?;
        self.state = SessionState::Idle;
        Ok((card.id, outcome))
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}
