//! Study library models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Video,
    Pdf,
    Link,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subject {
    Tech,
    Math,
    Physics,
    Chemistry,
    English,
    General,
}

impl Default for Subject {
    fn default() -> Self {
        Self::General
    }
}

/// A piece of study content in the library
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Display duration, e.g. "45 min" or "N/A"
    pub duration: String,
    /// Completion percentage, 0-100
    #[serde(default)]
    pub progress: u8,
    pub kind: ItemKind,
    #[serde(default)]
    pub subject: Subject,
    /// Video id or external URL, depending on `kind`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StudyItem {
    pub fn new(title: String, kind: ItemKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: "User-imported content".to_string(),
            category: "Personal".to_string(),
            duration: "N/A".to_string(),
            progress: 0,
            kind,
            subject: Subject::default(),
            source: None,
            created_at: Utc::now(),
        }
    }
}

/// A user-curated grouping of study items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: Uuid,
    pub title: String,
    pub items: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
