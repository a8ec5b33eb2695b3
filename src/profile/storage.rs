//! User profile storage

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::warn;

use crate::storage::Result;

use super::models::UserProfile;

/// Storage for the single user profile (atomic write via tmp + rename)
pub struct ProfileStorage {
    profile_path: PathBuf,
}

impl ProfileStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            profile_path: data_dir.join("profile.json"),
        })
    }

    /// Load the profile, falling back to the default when absent or corrupted
    pub fn load(&self) -> Result<UserProfile> {
        if !self.profile_path.exists() {
            return Ok(UserProfile::default());
        }

        let content = fs::read_to_string(&self.profile_path)?;
        match serde_json::from_str(&content) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                warn!("profile.json is corrupted, using defaults: {}", e);
                Ok(UserProfile::default())
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let tmp_path = self.profile_path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.profile_path)?;
        Ok(())
    }

    /// Award XP and persist
    pub fn add_xp(&self, amount: u64) -> Result<UserProfile> {
        let mut profile = self.load()?;
        profile.xp += amount;
        profile.updated_at = Utc::now();
        self.save(&profile)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProfileStorage::new(temp_dir.path().to_path_buf()).unwrap();

        let profile = storage.load().unwrap();
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.level(), 1);
    }

    #[test]
    fn test_add_xp_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProfileStorage::new(temp_dir.path().to_path_buf()).unwrap();

        storage.add_xp(150).unwrap();
        let profile = storage.add_xp(900).unwrap();

        assert_eq!(profile.xp, 1050);
        assert_eq!(profile.level(), 2);

        let reloaded = storage.load().unwrap();
        assert_eq!(reloaded.xp, 1050);
    }

    #[test]
    fn test_corrupted_profile_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("profile.json"), "???").unwrap();

        let storage = ProfileStorage::new(temp_dir.path().to_path_buf()).unwrap();
        let profile = storage.load().unwrap();
        assert_eq!(profile.xp, 0);
    }
}
