//! Quiz data models

use serde::{Deserialize, Serialize};

/// A multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    /// Shown after answering
    pub explanation: String,
}

/// Final score card for a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub xp_earned: u64,
}

/// A small builtin question bank, used when no custom bank is supplied
pub fn builtin_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "Which SQL clause filters rows before grouping?".to_string(),
            options: vec![
                "HAVING".to_string(),
                "WHERE".to_string(),
                "ORDER BY".to_string(),
                "LIMIT".to_string(),
            ],
            correct_answer: 1,
            explanation: "WHERE filters individual rows; HAVING filters groups.".to_string(),
        },
        QuizQuestion {
            question: "What is the time complexity of binary search?".to_string(),
            options: vec![
                "O(n)".to_string(),
                "O(n log n)".to_string(),
                "O(log n)".to_string(),
                "O(1)".to_string(),
            ],
            correct_answer: 2,
            explanation: "Each comparison halves the remaining search space.".to_string(),
        },
        QuizQuestion {
            question: "Which Python keyword defines a function?".to_string(),
            options: vec![
                "func".to_string(),
                "lambda".to_string(),
                "def".to_string(),
                "fn".to_string(),
            ],
            correct_answer: 2,
            explanation: "Functions are declared with `def name(...):`.".to_string(),
        },
    ]
}
