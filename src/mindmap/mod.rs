//! Mind map: nodes, edges, and their persistence

pub mod models;
pub mod storage;

pub use models::MindNode;
pub use storage::MindMapStorage;
