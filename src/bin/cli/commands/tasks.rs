use anyhow::{bail, Result};

use lumi_lib::tasks::{Task, TaskPriority, TaskStatus};

use crate::app::App;
use crate::OutputFormat;

pub fn run_add(app: &App, title: &str, format: &OutputFormat) -> Result<()> {
    let storage = app.open_tasks()?;
    let task = storage.add_task(title.to_string(), "General".to_string(), TaskPriority::Medium)?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&task_json(&task))?);
        }
        OutputFormat::Plain => {
            println!("Added \"{}\" to Todo", task.title);
            println!("  ID: {}", task.id);
        }
    }
    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let storage = app.open_tasks()?;

    match format {
        OutputFormat::Json => {
            let tasks = storage.list_tasks()?;
            let output: Vec<serde_json::Value> = tasks.iter().map(task_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for status in TaskStatus::ALL {
                let tasks = storage.list_by_status(status)?;
                println!("{} ({})", status.label(), tasks.len());
                for task in &tasks {
                    println!("  - {}  [{}]", task.title, short_id(task));
                }
            }
        }
    }
    Ok(())
}

pub fn run_move(app: &App, id: &str, status: &str, format: &OutputFormat) -> Result<()> {
    let storage = app.open_tasks()?;
    let status = parse_status(status)?;
    let task = find_task(&storage.list_tasks()?, id)?;
    let moved = storage.move_task(task.id, status)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&task_json(&moved))?);
        }
        OutputFormat::Plain => {
            println!("Moved \"{}\" to {}", moved.title, moved.status.label());
        }
    }
    Ok(())
}

fn parse_status(s: &str) -> Result<TaskStatus> {
    match s.to_lowercase().as_str() {
        "todo" => Ok(TaskStatus::Todo),
        "doing" => Ok(TaskStatus::Doing),
        "done" => Ok(TaskStatus::Done),
        other => bail!("Unknown column '{}'. Use todo, doing, or done.", other),
    }
}

/// Find a task by id prefix (case-insensitive)
fn find_task(tasks: &[Task], prefix: &str) -> Result<Task> {
    let prefix_lower = prefix.to_lowercase();
    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.id.to_string().starts_with(&prefix_lower))
        .collect();

    match matches.len() {
        0 => bail!("No task matching '{}'", prefix),
        1 => Ok(matches[0].clone()),
        _ => bail!(
            "Ambiguous task id '{}'. Matches:\n{}",
            prefix,
            matches
                .iter()
                .map(|t| format!("  - {}  {}", t.id, t.title))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

fn short_id(task: &Task) -> String {
    task.id.to_string().chars().take(8).collect()
}

fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "id": task.id.to_string(),
        "title": task.title,
        "subject": task.subject,
        "status": task.status.label(),
        "priority": format!("{:?}", task.priority),
        "createdAt": task.created_at.to_rfc3339(),
    })
}
