//! User profile and XP tracking

pub mod models;
pub mod storage;

pub use models::{UserProfile, XP_PER_LEVEL};
pub use storage::ProfileStorage;
