use std::io::{self, BufRead, Write};

use anyhow::Result;

use lumi_lib::review::algorithm::{format_interval, preview_intervals};
use lumi_lib::review::{ReviewOutcome, ReviewSession};

use crate::app::App;

/// Interactive review loop over the due queue.
///
/// Enter reveals the answer; h / g / e grade it; q quits early.
pub fn run(app: &App) -> Result<()> {
    let mut store = app.open_cards()?;
    let now = app.now();

    let due_ids: Vec<_> = store.due_cards(now).iter().map(|c| c.id).collect();
    if due_ids.is_empty() {
        println!("Nothing due. Come back later!");
        return Ok(());
    }
    println!("{} card(s) due.\n", due_ids.len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut reviewed = 0usize;

    for card_id in due_ids {
        let card = store.get_card(card_id)?.clone();
        let mut session = ReviewSession::new();
        session.start(card)?;

        let front = session
            .current()
            .map(|c| c.front.clone())
            .unwrap_or_default();
        println!("Q: {}", front);
        print!("  [Enter to reveal, q to quit] ");
        io::stdout().flush()?;

        match lines.next() {
            Some(line) => {
                if line?.trim() == "q" {
                    break;
                }
            }
            None => break,
        }

        let revealed = session.reveal()?;
        println!("A: {}", revealed.back);

        let [hard, good, easy] = preview_intervals(revealed.interval_days, now);
        let outcome = loop {
            print!(
                "  (h)ard {} / (g)ood {} / (e)asy {} / (q)uit: ",
                format_interval(hard),
                format_interval(good),
                format_interval(easy)
            );
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            match line.trim() {
                "h" => break ReviewOutcome::Hard,
                "g" => break ReviewOutcome::Good,
                "e" => break ReviewOutcome::Easy,
                "q" => {
                    println!("\nReviewed {} card(s).", reviewed);
                    return Ok(());
                }
                other => println!("  Unrecognized answer '{}'", other),
            }
        };

        let (id, outcome) = session.resolve(outcome)?;
        let updated = store.apply_review(id, outcome, now)?;
        println!(
            "  Next review in {}.\n",
            format_interval(updated.interval_days)
        );
        reviewed += 1;
    }

    println!("Reviewed {} card(s).", reviewed);
    Ok(())
}
