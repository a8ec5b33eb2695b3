//! Mind map models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node on the map canvas. Connections are directed edges stored
/// on the source node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindNode {
    pub id: Uuid,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub connections: Vec<Uuid>,
}

fn default_color() -> String {
    "#8b5cf6".to_string()
}

impl MindNode {
    pub fn new(label: String, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            x,
            y,
            color: default_color(),
            connections: Vec::new(),
        }
    }
}
