//! User profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// XP needed to advance one level
pub const XP_PER_LEVEL: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Consecutive study days
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub xp: u64,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: String) -> Self {
        Self {
            name,
            bio: String::new(),
            streak: 0,
            xp: 0,
            updated_at: Utc::now(),
        }
    }

    /// Level derived from XP: 0..999 is level 1, 1000..1999 level 2, ...
    pub fn level(&self) -> u64 {
        self.xp / XP_PER_LEVEL + 1
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Student".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_derivation() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.level(), 1);

        profile.xp = 999;
        assert_eq!(profile.level(), 1);

        profile.xp = 1000;
        assert_eq!(profile.level(), 2);

        profile.xp = 2500;
        assert_eq!(profile.level(), 3);
    }
}
