mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lumi", about = "Lumi study companion CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Memory card management
    #[command(subcommand)]
    Cards(CardsCommand),

    /// Review due memory cards interactively
    Review,

    /// Kanban task board
    #[command(subcommand)]
    Tasks(TasksCommand),

    /// Take the built-in quiz
    Quiz,

    /// Browse the starter flashcard deck
    Flash,

    /// Run a pomodoro timer
    Pomodoro {
        /// Timer mode
        #[arg(long, default_value = "focus")]
        mode: commands::pomodoro::ModeArg,
    },

    /// Run a command in the practice SQL console
    Sql {
        /// SQL text to "execute"
        command: String,
    },

    /// Talk to the study mascot
    Chat {
        /// Message to send (a new session is created if none exists)
        message: String,
    },

    /// Show card, task, and profile statistics
    Stats,
}

#[derive(Subcommand)]
enum CardsCommand {
    /// Add a new memory card
    Add {
        /// Question side
        front: String,
        /// Answer side
        back: String,
    },
    /// List all memory cards
    List {
        /// Show only cards that are due now
        #[arg(long)]
        due: bool,
    },
}

#[derive(Subcommand)]
enum TasksCommand {
    /// Add a task to the Todo column
    Add {
        /// Task title
        title: String,
    },
    /// List tasks by column
    List,
    /// Move a task to another column (id may be a unique prefix)
    Move {
        /// Task id or id prefix
        id: String,
        /// Target column: todo, doing, or done
        status: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir.clone())?;

    match cli.command {
        Command::Cards(subcmd) => match subcmd {
            CardsCommand::Add { front, back } => {
                commands::cards::run_add(&app, &front, &back, &cli.format)?;
            }
            CardsCommand::List { due } => {
                commands::cards::run_list(&app, due, &cli.format)?;
            }
        },
        Command::Review => {
            commands::review::run(&app)?;
        }
        Command::Tasks(subcmd) => match subcmd {
            TasksCommand::Add { title } => {
                commands::tasks::run_add(&app, &title, &cli.format)?;
            }
            TasksCommand::List => {
                commands::tasks::run_list(&app, &cli.format)?;
            }
            TasksCommand::Move { id, status } => {
                commands::tasks::run_move(&app, &id, &status, &cli.format)?;
            }
        },
        Command::Quiz => {
            commands::quiz::run(&app)?;
        }
        Command::Flash => {
            commands::flash::run()?;
        }
        Command::Pomodoro { mode } => {
            commands::pomodoro::run(mode)?;
        }
        Command::Sql { command } => {
            commands::sql::run(&app, &command, &cli.format)?;
        }
        Command::Chat { message } => {
            commands::chat::run(&app, &message, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
