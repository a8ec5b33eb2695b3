//! Simulated SQL practice console

pub mod models;
pub mod storage;

pub use models::{QueryLog, QueryStatus};
pub use storage::SqlConsole;
