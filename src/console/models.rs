//! Mock SQL console models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryStatus {
    Success,
    Error,
}

/// One line in the console's scrollback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryLog {
    pub id: Uuid,
    pub command: String,
    pub status: QueryStatus,
    pub executed_at: DateTime<Utc>,
}

impl QueryLog {
    pub fn new(command: String, status: QueryStatus, executed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            command,
            status,
            executed_at,
        }
    }

    /// The canned response line shown under the command
    pub fn response_line(&self) -> &'static str {
        match self.status {
            QueryStatus::Success => "Query OK, 1 row affected (0.02 sec)",
            QueryStatus::Error => "Error: Syntax error near token 'WHERE' or permission denied.",
        }
    }
}
