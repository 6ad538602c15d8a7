//! Node types for the namespace tree.

use crate::types::NodeId;
use chrono::{DateTime, Local};

/// File node: owned content. Size is always derived from the content, so
/// the two can never drift apart.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub content: String,
}

impl FileNode {
    pub fn empty() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Directory node: children in insertion order, names unique among siblings.
#[derive(Debug, Clone, Default)]
pub struct DirectoryNode {
    pub children: Vec<(String, NodeId)>,
}

impl DirectoryNode {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Insert a child entry. The caller has already checked the name is free.
    pub fn insert(&mut self, name: &str, id: NodeId) {
        self.children.push((name.to_string(), id));
    }

    pub fn remove(&mut self, name: &str) -> Option<NodeId> {
        let pos = self.children.iter().position(|(n, _)| n == name)?;
        Some(self.children.remove(pos).1)
    }
}

/// Payload of a node: an explicit tagged variant, pattern-matched by every
/// operation instead of any runtime type inspection.
#[derive(Debug, Clone)]
pub enum NodeKind {
    File(FileNode),
    Directory(DirectoryNode),
}

impl NodeKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File(_))
    }
}

/// A single namespace node.
///
/// `name` mirrors the key under which the parent lists this node; the root
/// has the empty name and no parent. `created` is fixed at creation and
/// survives moves and renames.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub created: DateTime<Local>,
    pub kind: NodeKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_tracks_content() {
        let mut file = FileNode::empty();
        assert_eq!(file.size(), 0);
        file.content = "hello".to_string();
        assert_eq!(file.size(), 5);
    }

    #[test]
    fn directory_children_keep_insertion_order() {
        let mut dir = DirectoryNode::default();
        dir.insert("b", NodeId(1));
        dir.insert("a", NodeId(2));
        let names: Vec<&str> = dir.children.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(dir.get("a"), Some(NodeId(2)));
        assert_eq!(dir.remove("b"), Some(NodeId(1)));
        assert_eq!(dir.get("b"), None);
    }
}
