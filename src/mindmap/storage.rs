//! Mind map persistence and graph edits

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use uuid::Uuid;

use crate::mindmap::models::MindNode;
use crate::storage::{Result, StorageError};

const MAP_FILE: &str = "mindmap.json";

pub struct MindMapStorage {
    map_path: PathBuf,
    nodes: Vec<MindNode>,
}

impl MindMapStorage {
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let map_path = data_dir.join(MAP_FILE);
        let nodes = if map_path.exists() {
            let raw = fs::read_to_string(&map_path)?;
            match serde_json::from_str(&raw) {
                Ok(nodes) => nodes,
                Err(e) => {
                    warn!("Could not parse {}: {}, starting fresh", map_path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Ok(Self { map_path, nodes })
    }

    pub fn nodes(&self) -> &[MindNode] {
        &self.nodes
    }

    pub fn add_node(&mut self, label: &str, x: f64, y: f64) -> Result<MindNode> {
        let node = MindNode::new(label.to_string(), x, y);
        info!("Adding mind map node '{}' at ({}, {})", label, x, y);
        self.nodes.push(node.clone());
        self.save()?;
        Ok(node)
    }

    /// Add a directed edge. Self-loops and duplicate edges are rejected.
    pub fn connect(&mut self, from: Uuid, to: Uuid) -> Result<()> {
        if from == to {
            return Err(StorageError::InvalidOperation(
                "Cannot connect a node to itself".to_string(),
            ));
        }
        if !self.nodes.iter().any(|n| n.id == to) {
            return Err(StorageError::NodeNotFound(to));
        }
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == from)
            .ok_or(StorageError::NodeNotFound(from))?;
        if node.connections.contains(&to) {
            return Err(StorageError::InvalidOperation(
                "Nodes are already connected".to_string(),
            ));
        }
        node.connections.push(to);
        self.save()
    }

    pub fn rename_node(&mut self, id: Uuid, label: &str) -> Result<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StorageError::NodeNotFound(id))?;
        node.label = label.to_string();
        self.save()
    }

    /// Remove a node and every edge pointing at it.
    pub fn delete_node(&mut self, id: Uuid) -> Result<()> {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return Err(StorageError::NodeNotFound(id));
        }
        for node in &mut self.nodes {
            node.connections.retain(|&c| c != id);
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.nodes)?;
        fs::write(&self.map_path, json)?;
        Ok(())
    }
}
