//! Mock SQL console: log persistence and simulated execution

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::Rng;

use crate::console::models::{QueryLog, QueryStatus};
use crate::storage::Result;

/// Probability that a non-blank command "fails"
const FAILURE_PROBABILITY: f64 = 0.2;

const LOG_FILE: &str = "sql_log.json";

pub struct SqlConsole {
    log_path: PathBuf,
    entries: Vec<QueryLog>,
}

impl SqlConsole {
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let log_path = data_dir.join(LOG_FILE);
        let entries = if log_path.exists() {
            let raw = fs::read_to_string(&log_path)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Could not parse {}: {}, starting fresh", log_path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Ok(Self { log_path, entries })
    }

    pub fn entries(&self) -> &[QueryLog] {
        &self.entries
    }

    /// Run a command with a randomly simulated outcome.
    pub fn run(&mut self, command: &str, now: DateTime<Utc>) -> Result<Option<QueryLog>> {
        let roll = rand::thread_rng().gen::<f64>();
        self.run_with_roll(command, now, roll)
    }

    /// Run a command with a caller-supplied roll in `[0, 1)`. Rolls below
    /// [`FAILURE_PROBABILITY`] fail; blank commands are ignored.
    pub fn run_with_roll(
        &mut self,
        command: &str,
        now: DateTime<Utc>,
        roll: f64,
    ) -> Result<Option<QueryLog>> {
        let command = command.trim();
        if command.is_empty() {
            debug!("Ignoring blank console command");
            return Ok(None);
        }

        let status = if roll < FAILURE_PROBABILITY {
            QueryStatus::Error
        } else {
            QueryStatus::Success
        };
        let entry = QueryLog::new(command.to_string(), status, now);
        info!("Console: {} -> {:?}", command, status);
        self.entries.push(entry.clone());
        self.save()?;
        Ok(Some(entry))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.log_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_console() -> (SqlConsole, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let console = SqlConsole::open(temp_dir.path()).unwrap();
        (console, temp_dir)
    }

    #[test]
    fn test_blank_command_ignored() {
        let (mut console, _dir) = create_test_console();
        let entry = console.run_with_roll("   ", Utc::now(), 0.9).unwrap();
        assert!(entry.is_none());
        assert!(console.entries().is_empty());
    }

    #[test]
    fn test_high_roll_succeeds() {
        let (mut console, _dir) = create_test_console();
        let entry = console
            .run_with_roll("SELECT * FROM users", Utc::now(), 0.5)
            .unwrap()
            .unwrap();
        assert_eq!(entry.status, QueryStatus::Success);
        assert_eq!(entry.response_line(), "Query OK, 1 row affected (0.02 sec)");
    }

    #[test]
    fn test_low_roll_fails() {
        let (mut console, _dir) = create_test_console();
        let entry = console
            .run_with_roll("DROP TABLE users", Utc::now(), 0.1)
            .unwrap()
            .unwrap();
        assert_eq!(entry.status, QueryStatus::Error);
    }

    #[test]
    fn test_log_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut console = SqlConsole::open(temp_dir.path()).unwrap();
            console
                .run_with_roll("SHOW TABLES", Utc::now(), 0.9)
                .unwrap();
        }
        let console = SqlConsole::open(temp_dir.path()).unwrap();
        assert_eq!(console.entries().len(), 1);
        assert_eq!(console.entries()[0].command, "SHOW TABLES");
    }

    #[test]
    fn test_clear_empties_log() {
        let (mut console, _dir) = create_test_console();
        console.run_with_roll("SELECT 1", Utc::now(), 0.9).unwrap();
        console.clear().unwrap();
        assert!(console.entries().is_empty());
    }
}
