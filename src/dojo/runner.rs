//! Simulated execution of practice code
//!
//! There is no interpreter here. A submission passes when it is
//! meaningfully longer than the starter scaffold; everything else
//! fails with the challenge's hint attached.

use crate::dojo::models::{CodeChallenge, Language, RunOutcome};

/// Minimum number of characters the student must add beyond the starter
const MIN_PROGRESS: usize = 5;

pub fn run(challenge: &CodeChallenge, code: &str) -> RunOutcome {
    if code.len() > challenge.starter_code.len() + MIN_PROGRESS {
        RunOutcome {
            success: true,
            output: success_output(challenge.language).to_string(),
        }
    } else {
        RunOutcome {
            success: false,
            output: format!("Execution failed. Hint: {}", challenge.hint),
        }
    }
}

fn success_output(language: Language) -> &'static str {
    match language {
        Language::Python => ">>> Program finished with exit code 0",
        Language::JavaScript => "node: script completed successfully",
        Language::Java => "Process finished with exit code 0",
        Language::Cpp => "Program returned 0",
        Language::Web => "Rendered without errors",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dojo::models::builtin_challenges;

    #[test]
    fn test_starter_code_alone_fails() {
        let challenge = &builtin_challenges()[0];
        let outcome = run(challenge, &challenge.starter_code);
        assert!(!outcome.success);
        assert!(outcome.output.contains(&challenge.hint));
    }

    #[test]
    fn test_extended_code_succeeds() {
        let challenge = &builtin_challenges()[0];
        let code = format!("{}print('Hello, world!')\n", challenge.starter_code);
        let outcome = run(challenge, &code);
        assert!(outcome.success);
        assert!(outcome.output.contains("exit code 0"));
    }

    #[test]
    fn test_barely_over_threshold() {
        let challenge = &builtin_challenges()[0];
        // exactly starter + MIN_PROGRESS is still a failure
        let code = format!("{}12345", challenge.starter_code);
        assert!(!run(challenge, &code).success);
        let code = format!("{}123456", challenge.starter_code);
        assert!(run(challenge, &code).success);
    }
}
