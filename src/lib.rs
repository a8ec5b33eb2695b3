//! lumi: a local-first study companion
//!
//! Everything lives in plain JSON files under the user's data
//! directory. The heart of the crate is the spaced-repetition
//! scheduler in [`review`]; the rest are small study tools that
//! share its storage conventions.

pub mod clock;
pub mod console;
pub mod dojo;
pub mod flashcards;
pub mod library;
pub mod mascot;
pub mod mindmap;
pub mod pomodoro;
pub mod profile;
pub mod quiz;
pub mod review;
pub mod storage;
pub mod tasks;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use storage::{default_data_dir, Result, StorageError};
