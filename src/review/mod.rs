//! Spaced-repetition reviewer
//!
//! This module provides:
//! - Memory card storage with a single mutation entry point
//! - Due-card selection
//! - The question/answer review session state machine
//! - The fixed hard/good/easy interval heuristic

pub mod algorithm;
pub mod models;
pub mod session;
pub mod storage;

pub use models::*;
pub use session::{ReviewSession, SessionState};
pub use storage::CardStore;
