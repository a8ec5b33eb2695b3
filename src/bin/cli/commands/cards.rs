use anyhow::Result;

use lumi_lib::review::algorithm::format_interval;

use crate::app::App;
use crate::OutputFormat;

pub fn run_add(app: &App, front: &str, back: &str, format: &OutputFormat) -> Result<()> {
    let mut store = app.open_cards()?;
    match store.add_card(front, back, app.now())? {
        Some(card) => match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "id": card.id.to_string(),
                    "front": card.front,
                    "back": card.back,
                    "nextReview": card.next_review.to_rfc3339(),
                    "intervalDays": card.interval_days,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Plain => {
                println!("Added card \"{}\" (due now)", card.front);
                println!("  ID: {}", card.id);
            }
        },
        None => {
            eprintln!("Both sides of a card need text; nothing was added.");
        }
    }
    Ok(())
}

pub fn run_list(app: &App, due_only: bool, format: &OutputFormat) -> Result<()> {
    let store = app.open_cards()?;
    let now = app.now();
    let cards: Vec<_> = if due_only {
        store.due_cards(now)
    } else {
        store.cards().iter().collect()
    };

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = cards
                .iter()
                .map(|card| {
                    serde_json::json!({
                        "id": card.id.to_string(),
                        "front": card.front,
                        "back": card.back,
                        "nextReview": card.next_review.to_rfc3339(),
                        "intervalDays": card.interval_days,
                        "isDue": card.is_due(now),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("No cards{}.", if due_only { " due" } else { "" });
                return Ok(());
            }
            for card in &cards {
                let due_marker = if card.is_due(now) { "*" } else { " " };
                println!(
                    "{} {}  [{}]  {}",
                    due_marker,
                    card.front,
                    format_interval(card.interval_days),
                    card.id
                );
            }
            println!("\n{} card(s); * = due now", cards.len());
        }
    }
    Ok(())
}
