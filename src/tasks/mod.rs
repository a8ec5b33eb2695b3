//! Kanban board for study tasks

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::TaskStorage;
