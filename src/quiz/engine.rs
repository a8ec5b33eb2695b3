//! Quiz run state machine
//!
//! Walks a question list: answer locks the current question, advance moves on
//! and completes after the last one. Each correct answer is worth 50 XP.

use crate::storage::{Result, StorageError};

use super::models::{QuizQuestion, QuizResult};

/// XP awarded per correct answer
pub const XP_PER_CORRECT: u64 = 50;

/// How the current question was answered, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    /// Carries the index of the right option
    Incorrect(usize),
}

#[derive(Debug)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answered: Option<AnswerFeedback>,
    score: usize,
    completed: bool,
}

impl QuizRun {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(StorageError::InvalidOperation(
                "a quiz needs at least one question".to_string(),
            ));
        }
        Ok(Self {
            questions,
            current_index: 0,
            answered: None,
            score: 0,
            completed: false,
        })
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    /// 1-based position for "Question 2 of 5" displays
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.questions.len())
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Answer the current question with an option index
    ///
    /// Locks the question; answering twice is rejected.
    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback> {
        if self.completed {
            return Err(StorageError::InvalidOperation(
                "the quiz is already completed".to_string(),
            ));
        }
        if self.answered.is_some() {
            return Err(StorageError::InvalidOperation(
                "this question was already answered".to_string(),
            ));
        }
        let correct = self.current().correct_answer;
        if option >= self.current().options.len() {
            return Err(StorageError::InvalidOperation(format!(
                "option {} is out of range",
                option
            )));
        }

        let feedback = if option == correct {
            self.score += 1;
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect(correct)
        };
        self.answered = Some(feedback);
        Ok(feedback)
    }

    /// Move on to the next question, or finish after the last one
    ///
    /// Returns the final result when the run completes.
    pub fn advance(&mut self) -> Result<Option<QuizResult>> {
        if self.answered.is_none() {
            return Err(StorageError::InvalidOperation(
                "answer the current question first".to_string(),
            ));
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.answered = None;
            Ok(None)
        } else {
            self.completed = true;
            Ok(Some(QuizResult {
                score: self.score,
                total: self.questions.len(),
                xp_earned: self.score as u64 * XP_PER_CORRECT,
            }))
        }
    }

    /// Start over with the same questions
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answered = None;
        self.score = 0;
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::models::builtin_questions;

    #[test]
    fn test_empty_bank_rejected() {
        assert!(QuizRun::new(Vec::new()).is_err());
    }

    #[test]
    fn test_correct_answers_score_and_earn_xp() {
        let questions = builtin_questions();
        let total = questions.len();
        let mut run = QuizRun::new(questions.clone()).unwrap();

        let mut result = None;
        for q in &questions {
            assert_eq!(run.answer(q.correct_answer).unwrap(), AnswerFeedback::Correct);
            result = run.advance().unwrap();
        }

        let result = result.expect("quiz should complete after the last question");
        assert_eq!(result.score, total);
        assert_eq!(result.xp_earned, total as u64 * XP_PER_CORRECT);
        assert!(run.is_completed());
    }

    #[test]
    fn test_incorrect_answer_reveals_right_option() {
        let mut run = QuizRun::new(builtin_questions()).unwrap();
        let correct = run.current().correct_answer;
        let wrong = (correct + 1) % run.current().options.len();

        assert_eq!(run.answer(wrong).unwrap(), AnswerFeedback::Incorrect(correct));
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn test_double_answer_rejected() {
        let mut run = QuizRun::new(builtin_questions()).unwrap();
        run.answer(0).unwrap();
        assert!(run.answer(1).is_err());
    }

    #[test]
    fn test_advance_before_answer_rejected() {
        let mut run = QuizRun::new(builtin_questions()).unwrap();
        assert!(run.advance().is_err());
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut run = QuizRun::new(builtin_questions()).unwrap();
        run.answer(run.current().correct_answer).unwrap();
        run.advance().unwrap();

        run.restart();
        assert_eq!(run.score(), 0);
        assert_eq!(run.position(), (1, 3));
        assert!(!run.is_completed());
    }
}
