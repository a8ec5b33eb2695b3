use std::io::{self, BufRead, Write};

use anyhow::Result;

use lumi_lib::quiz::{builtin_questions, AnswerFeedback, QuizRun};

use crate::app::App;

pub fn run(app: &App) -> Result<()> {
    let mut quiz = QuizRun::new(builtin_questions())?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let (current, total) = quiz.position();
        let question = quiz.current().clone();
        println!("\nQuestion {} of {}: {}", current, total, question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let choice = loop {
            print!("Your answer [1-{}]: ", question.options.len());
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= question.options.len() => break n - 1,
                _ => println!("Enter a number between 1 and {}.", question.options.len()),
            }
        };

        match quiz.answer(choice)? {
            AnswerFeedback::Correct => println!("Correct!"),
            AnswerFeedback::Incorrect(right) => {
                println!("Not quite. The answer was: {}", question.options[right]);
            }
        }
        if !question.explanation.is_empty() {
            println!("  {}", question.explanation);
        }

        if let Some(result) = quiz.advance()? {
            println!(
                "\nFinished: {}/{} correct, +{} XP",
                result.score, result.total, result.xp_earned
            );
            if result.xp_earned > 0 {
                let profile = app.open_profile()?.add_xp(result.xp_earned)?;
                println!(
                    "You now have {} XP (level {}).",
                    profile.xp,
                    profile.level()
                );
            }
            return Ok(());
        }
    }
}
