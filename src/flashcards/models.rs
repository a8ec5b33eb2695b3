//! Flashcard deck models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A question/answer card in a browsing deck (no scheduling state)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: Difficulty,
}

/// The starter deck shipped with the app
pub fn starter_deck() -> Vec<Flashcard> {
    vec![
        Flashcard {
            question: "What does SELECT DISTINCT do?".to_string(),
            answer: "Returns only unique rows for the selected columns.".to_string(),
            category: "Database".to_string(),
            difficulty: Difficulty::Easy,
        },
        Flashcard {
            question: "Difference between a list and a tuple in Python?".to_string(),
            answer: "Lists are mutable; tuples are immutable.".to_string(),
            category: "Python".to_string(),
            difficulty: Difficulty::Medium,
        },
        Flashcard {
            question: "What is a foreign key?".to_string(),
            answer: "A column referencing the primary key of another table.".to_string(),
            category: "Database".to_string(),
            difficulty: Difficulty::Medium,
        },
        Flashcard {
            question: "What does HTML stand for?".to_string(),
            answer: "HyperText Markup Language.".to_string(),
            category: "Web".to_string(),
            difficulty: Difficulty::Easy,
        },
    ]
}
