//! Flip-through flashcard decks (no scheduling; see `review` for that)

pub mod deck;
pub mod models;

pub use deck::DeckWalker;
pub use models::*;
