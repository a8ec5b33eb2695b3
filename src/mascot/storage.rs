//! Mascot chat transcript persistence
//!
//! Each session lives in its own JSON file so a corrupt transcript
//! never takes the others down with it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::mascot::models::{ChatMessage, ChatRole, ChatSession};
use crate::mascot::reply::reply_to;
use crate::storage::{Result, StorageError};

const SESSIONS_DIR: &str = "chat_sessions";

pub struct MascotStorage {
    sessions_dir: PathBuf,
}

impl MascotStorage {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let sessions_dir = data_dir.join(SESSIONS_DIR);
        fs::create_dir_all(&sessions_dir)?;
        Ok(Self { sessions_dir })
    }

    pub fn create_session(&self, title: &str, now: DateTime<Utc>) -> Result<ChatSession> {
        let session = ChatSession::new(title.to_string(), now);
        info!("Creating chat session '{}'", title);
        self.save_session(&session)?;
        Ok(session)
    }

    /// All sessions, most recently updated first. Unreadable files are
    /// skipped with a warning.
    pub fn list_sessions(&self) -> Result<Vec<ChatSession>> {
        let mut sessions = Vec::new();
        for entry in fs::read_dir(&self.sessions_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<ChatSession>(&raw) {
                Ok(session) => sessions.push(session),
                Err(e) => warn!("Skipping unreadable session {}: {}", path.display(), e),
            }
        }
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }

    pub fn load_session(&self, id: Uuid) -> Result<ChatSession> {
        let path = self.session_path(id);
        if !path.exists() {
            return Err(StorageError::SessionNotFound(id));
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Append a user message and the mascot's scripted answer.
    /// Returns the assistant message.
    pub fn send(&self, id: Uuid, message: &str, now: DateTime<Utc>) -> Result<ChatMessage> {
        let mut session = self.load_session(id)?;
        session.messages.push(ChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
            timestamp: now,
        });
        let answer = ChatMessage {
            role: ChatRole::Assistant,
            content: reply_to(message),
            timestamp: now,
        };
        session.messages.push(answer.clone());
        session.updated_at = now;
        self.save_session(&session)?;
        Ok(answer)
    }

    pub fn delete_session(&self, id: Uuid) -> Result<()> {
        let path = self.session_path(id);
        if !path.exists() {
            return Err(StorageError::SessionNotFound(id));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn session_path(&self, id: Uuid) -> PathBuf {
        self.sessions_dir.join(format!("{}.json", id))
    }

    // Write to a temp file first so a crash mid-write never leaves a
    // truncated transcript behind.
    fn save_session(&self, session: &ChatSession) -> Result<()> {
        let path = self.session_path(session.id);
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (MascotStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = MascotStorage::open(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_send_appends_user_and_reply() {
        let (storage, _dir) = create_test_storage();
        let now = Utc::now();
        let session = storage.create_session("Study chat", now).unwrap();
        let answer = storage.send(session.id, "hello", now).unwrap();
        assert_eq!(answer.role, ChatRole::Assistant);

        let loaded = storage.load_session(session.id).unwrap();
        assert_eq!(loaded.messages.len(), 2);
        assert_eq!(loaded.messages[0].role, ChatRole::User);
        assert_eq!(loaded.messages[0].content, "hello");
    }

    #[test]
    fn test_sessions_listed_newest_first() {
        let (storage, _dir) = create_test_storage();
        let now = Utc::now();
        let older = storage.create_session("First", now).unwrap();
        let newer = storage
            .create_session("Second", now + Duration::minutes(5))
            .unwrap();
        let sessions = storage.list_sessions().unwrap();
        assert_eq!(sessions[0].id, newer.id);
        assert_eq!(sessions[1].id, older.id);
    }

    #[test]
    fn test_send_bumps_updated_at() {
        let (storage, _dir) = create_test_storage();
        let now = Utc::now();
        let session = storage.create_session("Chat", now).unwrap();
        let later = now + Duration::minutes(10);
        storage.send(session.id, "ping", later).unwrap();
        let loaded = storage.load_session(session.id).unwrap();
        assert_eq!(loaded.updated_at, later);
    }

    #[test]
    fn test_missing_session_errors() {
        let (storage, _dir) = create_test_storage();
        let id = Uuid::new_v4();
        assert!(matches!(
            storage.load_session(id),
            Err(StorageError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_delete_session() {
        let (storage, _dir) = create_test_storage();
        let session = storage.create_session("Temp", Utc::now()).unwrap();
        storage.delete_session(session.id).unwrap();
        assert!(storage.load_session(session.id).is_err());
    }
}
