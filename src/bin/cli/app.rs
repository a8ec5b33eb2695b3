use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use lumi_lib::clock::{Clock, SystemClock};
use lumi_lib::console::SqlConsole;
use lumi_lib::mascot::MascotStorage;
use lumi_lib::profile::ProfileStorage;
use lumi_lib::review::CardStore;
use lumi_lib::tasks::TaskStorage;

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    clock: SystemClock,
}

impl App {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => lumi_lib::default_data_dir().context("Failed to get data directory")?,
        };
        Ok(Self {
            data_dir,
            clock: SystemClock,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn open_cards(&self) -> Result<CardStore> {
        CardStore::open(self.data_dir.clone()).context("Failed to open card store")
    }

    pub fn open_tasks(&self) -> Result<TaskStorage> {
        TaskStorage::new(self.data_dir.clone()).context("Failed to open task board")
    }

    pub fn open_profile(&self) -> Result<ProfileStorage> {
        ProfileStorage::new(self.data_dir.clone()).context("Failed to open profile")
    }

    pub fn open_console(&self) -> Result<SqlConsole> {
        SqlConsole::open(&self.data_dir).context("Failed to open SQL console log")
    }

    pub fn open_mascot(&self) -> Result<MascotStorage> {
        MascotStorage::open(&self.data_dir).context("Failed to open chat sessions")
    }
}
