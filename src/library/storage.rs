//! Library and playlist storage

use std::fs;
use std::path::PathBuf;

use log::warn;
use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::models::{Playlist, StudyItem};

pub struct LibraryStorage {
    items_path: PathBuf,
    playlists_path: PathBuf,
}

impl LibraryStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            items_path: data_dir.join("library.json"),
            playlists_path: data_dir.join("playlists.json"),
        })
    }

    pub fn list_items(&self) -> Result<Vec<StudyItem>> {
        read_list(&self.items_path, "library.json")
    }

    /// Add an imported item to the library
    pub fn add_item(&self, item: StudyItem) -> Result<StudyItem> {
        let mut items = self.list_items()?;
        items.push(item.clone());
        self.save_items(&items)?;
        Ok(item)
    }

    pub fn list_playlists(&self) -> Result<Vec<Playlist>> {
        read_list(&self.playlists_path, "playlists.json")
    }

    pub fn create_playlist(&self, title: String) -> Result<Playlist> {
        let playlist = Playlist::new(title);
        let mut playlists = self.list_playlists()?;
        playlists.push(playlist.clone());
        self.save_playlists(&playlists)?;
        Ok(playlist)
    }

    /// Append a library item to a playlist
    pub fn add_to_playlist(&self, playlist_id: Uuid, item_id: Uuid) -> Result<Playlist> {
        // The item must exist in the library
        let items = self.list_items()?;
        if !items.iter().any(|i| i.id == item_id) {
            return Err(StorageError::NotFound(format!(
                "library item {} not found",
                item_id
            )));
        }

        let mut playlists = self.list_playlists()?;
        let playlist = playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| StorageError::NotFound(format!("playlist {} not found", playlist_id)))?;

        if !playlist.items.contains(&item_id) {
            playlist.items.push(item_id);
        }
        let updated = playlist.clone();

        self.save_playlists(&playlists)?;
        Ok(updated)
    }

    fn save_items(&self, items: &[StudyItem]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.items_path, json)?;
        Ok(())
    }

    fn save_playlists(&self, playlists: &[Playlist]) -> Result<()> {
        let json = serde_json::to_string_pretty(playlists)?;
        fs::write(&self.playlists_path, json)?;
        Ok(())
    }
}

fn read_list<T: serde::de::DeserializeOwned>(path: &PathBuf, label: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(list) => Ok(list),
        Err(e) => {
            warn!("{} is corrupted, starting empty: {}", label, e);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::import::item_from_link;
    use tempfile::TempDir;

    fn create_test_storage() -> (LibraryStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LibraryStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_import_and_list() {
        let (storage, _temp) = create_test_storage();

        let item = item_from_link("https://youtube.com/watch?v=abc123", Some("Vid")).unwrap();
        storage.add_item(item).unwrap();

        let items = storage.list_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Vid");
    }

    #[test]
    fn test_playlist_membership() {
        let (storage, _temp) = create_test_storage();

        let item = storage
            .add_item(item_from_link("https://example.com", None).unwrap())
            .unwrap();
        let playlist = storage.create_playlist("Backend".to_string()).unwrap();

        let updated = storage.add_to_playlist(playlist.id, item.id).unwrap();
        assert_eq!(updated.items, vec![item.id]);

        // Adding twice stays deduplicated
        let updated = storage.add_to_playlist(playlist.id, item.id).unwrap();
        assert_eq!(updated.items.len(), 1);
    }

    #[test]
    fn test_playlist_rejects_unknown_item() {
        let (storage, _temp) = create_test_storage();
        let playlist = storage.create_playlist("Misc".to_string()).unwrap();

        let result = storage.add_to_playlist(playlist.id, Uuid::new_v4());
        assert!(result.is_err());
    }
}
