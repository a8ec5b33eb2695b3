//! Multiple-choice quiz engine

pub mod engine;
pub mod models;

pub use engine::{AnswerFeedback, QuizRun, XP_PER_CORRECT};
pub use models::*;
