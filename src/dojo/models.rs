//! Practice challenge models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    Web,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Web => "HTML/CSS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChallenge {
    pub title: String,
    pub description: String,
    pub language: Language,
    pub difficulty: ChallengeDifficulty,
    pub starter_code: String,
    pub hint: String,
}

/// Severity of a static check finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LintSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintFinding {
    pub line: usize,
    pub severity: LintSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub success: bool,
    pub output: String,
}

pub fn builtin_challenges() -> Vec<CodeChallenge> {
    vec![
        CodeChallenge {
            title: "Hello, world".to_string(),
            description: "Print a greeting to the console.".to_string(),
            language: Language::Python,
            difficulty: ChallengeDifficulty::Easy,
            starter_code: "# Print 'Hello, world!'\n".to_string(),
            hint: "Use the print() function.".to_string(),
        },
        CodeChallenge {
            title: "Sum of a list".to_string(),
            description: "Add up every number in the numbers array.".to_string(),
            language: Language::JavaScript,
            difficulty: ChallengeDifficulty::Medium,
            starter_code: "const numbers = [1, 2, 3, 4];\n// compute the sum\n".to_string(),
            hint: "reduce() collapses an array into a single value.".to_string(),
        },
        CodeChallenge {
            title: "Card layout".to_string(),
            description: "Build a simple card with a title and a paragraph.".to_string(),
            language: Language::Web,
            difficulty: ChallengeDifficulty::Easy,
            starter_code: "<div class=\"card\">\n</div>\n".to_string(),
            hint: "Nest an <h2> and a <p> inside the div.".to_string(),
        },
    ]
}
