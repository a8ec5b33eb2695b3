//! Study content library: imported items and playlists

pub mod import;
pub mod models;
pub mod storage;

pub use import::{filter_items, item_from_file, item_from_link};
pub use models::*;
pub use storage::LibraryStorage;
