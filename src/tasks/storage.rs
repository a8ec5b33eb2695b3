//! Kanban board storage

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::models::*;

/// Storage for the kanban board (one JSON document)
pub struct TaskStorage {
    tasks_path: PathBuf,
}

impl TaskStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            tasks_path: data_dir.join("tasks.json"),
        })
    }

    /// List all tasks in board order
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!("tasks.json is corrupted, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// List tasks in a single column
    pub fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        let tasks = self.list_tasks()?;
        Ok(tasks.into_iter().filter(|t| t.status == status).collect())
    }

    /// Add a task to the To Do column
    pub fn add_task(&self, title: String, subject: String, priority: TaskPriority) -> Result<Task> {
        let task = Task::new(title, subject).with_priority(priority);

        let mut tasks = self.list_tasks()?;
        tasks.push(task.clone());
        self.save(&tasks)?;

        Ok(task)
    }

    /// Move a task to another column
    pub fn move_task(&self, id: Uuid, status: TaskStatus) -> Result<Task> {
        let mut tasks = self.list_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StorageError::TaskNotFound(id))?;

        task.status = status;
        task.updated_at = Utc::now();
        let moved = task.clone();

        self.save(&tasks)?;
        Ok(moved)
    }

    /// Delete a task from the board
    pub fn delete_task(&self, id: Uuid) -> Result<()> {
        let mut tasks = self.list_tasks()?;
        let len_before = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == len_before {
            return Err(StorageError::TaskNotFound(id));
        }

        self.save(&tasks)
    }

    /// Per-column counts for the board header
    pub fn counts(&self) -> Result<BoardCounts> {
        let tasks = self.list_tasks()?;
        let mut counts = BoardCounts::default();
        for task in &tasks {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::Doing => counts.doing += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        Ok(counts)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (TaskStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = TaskStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_add_starts_in_todo() {
        let (storage, _temp) = create_test_storage();

        let task = storage
            .add_task("ER modeling".to_string(), "Database".to_string(), TaskPriority::High)
            .unwrap();

        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(storage.list_by_status(TaskStatus::Todo).unwrap().len(), 1);
    }

    #[test]
    fn test_move_between_columns() {
        let (storage, _temp) = create_test_storage();

        let task = storage
            .add_task("Review JOINs".to_string(), "Database".to_string(), TaskPriority::High)
            .unwrap();

        let moved = storage.move_task(task.id, TaskStatus::Doing).unwrap();
        assert_eq!(moved.status, TaskStatus::Doing);

        let counts = storage.counts().unwrap();
        assert_eq!(counts.todo, 0);
        assert_eq!(counts.doing, 1);
        assert_eq!(counts.done, 0);
    }

    #[test]
    fn test_move_unknown_task_errors() {
        let (storage, _temp) = create_test_storage();
        let result = storage.move_task(Uuid::new_v4(), TaskStatus::Done);
        assert!(matches!(result, Err(StorageError::TaskNotFound(_))));
    }

    #[test]
    fn test_delete_task() {
        let (storage, _temp) = create_test_storage();

        let task = storage
            .add_task("Read UX article".to_string(), "Design".to_string(), TaskPriority::Low)
            .unwrap();

        storage.delete_task(task.id).unwrap();
        assert!(storage.list_tasks().unwrap().is_empty());
        assert!(storage.delete_task(task.id).is_err());
    }
}
