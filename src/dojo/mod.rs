//! Coding practice challenges with simulated checks

pub mod lint;
pub mod models;
pub mod runner;

pub use lint::lint;
pub use models::{
    builtin_challenges, ChallengeDifficulty, CodeChallenge, Language, LintFinding, LintSeverity,
    RunOutcome,
};
pub use runner::run;
