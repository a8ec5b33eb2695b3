use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, command: &str, format: &OutputFormat) -> Result<()> {
    let mut console = app.open_console()?;
    match console.run(command, app.now())? {
        Some(entry) => match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "command": entry.command,
                    "status": format!("{:?}", entry.status),
                    "response": entry.response_line(),
                    "executedAt": entry.executed_at.to_rfc3339(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Plain => {
                println!("mysql> {}", entry.command);
                println!("{}", entry.response_line());
            }
        },
        None => {
            eprintln!("Nothing to execute.");
        }
    }
    Ok(())
}
