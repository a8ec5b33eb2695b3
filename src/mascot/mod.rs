//! Study mascot: scripted chat companion

pub mod models;
pub mod reply;
pub mod storage;

pub use models::{ChatMessage, ChatRole, ChatSession};
pub use reply::reply_to;
pub use storage::MascotStorage;
