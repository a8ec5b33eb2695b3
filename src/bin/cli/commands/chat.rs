use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

/// Send one message to the mascot, reusing the most recent session.
pub fn run(app: &App, message: &str, format: &OutputFormat) -> Result<()> {
    let storage = app.open_mascot()?;
    let now = app.now();

    let session = match storage.list_sessions()?.into_iter().next() {
        Some(session) => session,
        None => storage.create_session("Study chat", now)?,
    };
    let answer = storage.send(session.id, message, now)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sessionId": session.id.to_string(),
                "reply": answer.content,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", answer.content);
        }
    }
    Ok(())
}
