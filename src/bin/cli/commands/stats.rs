use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let cards = app.open_cards()?;
    let review_stats = cards.stats(app.now());
    let board = app.open_tasks()?.counts()?;
    let profile = app.open_profile()?.load()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "cards": {
                    "total": review_stats.total_cards,
                    "due": review_stats.due_cards,
                },
                "tasks": {
                    "todo": board.todo,
                    "doing": board.doing,
                    "done": board.done,
                },
                "profile": {
                    "name": profile.name,
                    "xp": profile.xp,
                    "level": profile.level(),
                    "streak": profile.streak,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} (level {}, {} XP)", profile.name, profile.level(), profile.xp);
            println!(
                "Cards: {} total, {} due now",
                review_stats.total_cards, review_stats.due_cards
            );
            println!(
                "Tasks: {} todo / {} doing / {} done",
                board.todo, board.doing, board.done
            );
        }
    }
    Ok(())
}
