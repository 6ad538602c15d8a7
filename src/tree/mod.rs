//! Namespace Tree
//!
//! Owns every node in an arena addressed by [`NodeId`] and tracks the
//! cursor (current directory). All structural mutation funnels through
//! here, so parent links, child lists, and node names never diverge.

pub mod node;

use crate::error::{FsError, Result};
use crate::types::NodeId;
use chrono::Local;
use node::{DirectoryNode, Node, NodeKind};

/// The full in-memory tree of directories and files plus the cursor.
///
/// Nodes are reachable only through parent/child handles into the arena;
/// nothing outside the namespace owns a node. Removed slots are recycled
/// through a free list.
pub struct Namespace {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
    cursor: NodeId,
}

impl Namespace {
    /// Create a namespace holding only the root directory, with the cursor
    /// at the root.
    pub fn new() -> Self {
        let root = Node {
            name: String::new(),
            parent: None,
            created: Local::now(),
            kind: NodeKind::Directory(DirectoryNode::default()),
        };
        Self {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
            cursor: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The directory against which relative paths resolve.
    pub fn cursor_dir(&self) -> NodeId {
        self.cursor
    }

    /// Move the cursor. The handle must name a directory.
    pub fn change_cursor(&mut self, dir: NodeId) {
        debug_assert!(self.node(dir).kind.is_dir());
        self.cursor = dir;
    }

    /// Root detection by handle identity, never by structural comparison.
    pub fn is_root(&self, id: NodeId) -> bool {
        id == self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("live node handle")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("live node handle")
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.node(id).kind.is_dir()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Look up a child by name. Returns `NotFound` with the child's
    /// would-be path when absent.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Result<NodeId> {
        let child = match &self.node(dir).kind {
            NodeKind::Directory(d) => d.get(name),
            NodeKind::File(_) => None,
        };
        child.ok_or_else(|| FsError::not_found(self.join_path(dir, name)))
    }

    /// Insert a new node under `dir`. Fails with `AlreadyExists` when the
    /// name is taken; the tree is untouched on failure.
    pub fn create_child(&mut self, dir: NodeId, name: &str, kind: NodeKind) -> Result<NodeId> {
        match &self.node(dir).kind {
            NodeKind::Directory(d) => {
                if d.get(name).is_some() {
                    return Err(FsError::already_exists(self.join_path(dir, name)));
                }
            }
            NodeKind::File(_) => {
                return Err(FsError::not_a_directory(self.path_of(dir)));
            }
        }
        let child = self.alloc(Node {
            name: name.to_string(),
            parent: Some(dir),
            created: Local::now(),
            kind,
        });
        match &mut self.node_mut(dir).kind {
            NodeKind::Directory(d) => d.insert(name, child),
            NodeKind::File(_) => unreachable!("checked above"),
        }
        Ok(child)
    }

    /// Detach a child by name and free it together with its whole subtree.
    pub fn remove_child(&mut self, dir: NodeId, name: &str) -> Result<()> {
        let child = self.detach(dir, name)?;
        self.free_subtree(child);
        Ok(())
    }

    /// Remove a child entry from `dir` without freeing the node, returning
    /// its handle. Used by `mv` to relocate a subtree intact.
    pub(crate) fn detach(&mut self, dir: NodeId, name: &str) -> Result<NodeId> {
        let removed = match &mut self.node_mut(dir).kind {
            NodeKind::Directory(d) => d.remove(name),
            NodeKind::File(_) => None,
        };
        removed.ok_or_else(|| FsError::not_found(self.join_path(dir, name)))
    }

    /// Attach an existing node under `dir` as `name`, updating the node's
    /// own name and parent link. The caller has already checked the name
    /// is free and that no cycle results.
    pub(crate) fn attach(&mut self, dir: NodeId, name: &str, child: NodeId) {
        {
            let node = self.node_mut(child);
            node.name = name.to_string();
            node.parent = Some(dir);
        }
        match &mut self.node_mut(dir).kind {
            NodeKind::Directory(d) => d.insert(name, child),
            NodeKind::File(_) => unreachable!("mv destination is checked to be a directory"),
        }
    }

    /// Canonical absolute path of a node: `/`-joined names from the root,
    /// derived on demand by walking parent links. The root renders as `/`.
    pub fn path_of(&self, id: NodeId) -> String {
        if self.is_root(id) {
            return "/".to_string();
        }
        let mut names = Vec::new();
        let mut cur = id;
        while !self.is_root(cur) {
            let node = self.node(cur);
            names.push(node.name.clone());
            cur = node.parent.expect("non-root node has a parent");
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    pub(crate) fn join_path(&self, dir: NodeId, name: &str) -> String {
        if self.is_root(dir) {
            format!("/{}", name)
        } else {
            format!("{}/{}", self.path_of(dir), name)
        }
    }

    /// True when `ancestor` is `id` itself or lies on `id`'s parent chain.
    pub(crate) fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.node(id).parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes[id.0].take() {
            if let NodeKind::Directory(dir) = node.kind {
                for (_, child) in dir.children {
                    self.free_subtree(child);
                }
            }
            self.free.push(id.0);
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::node::{FileNode, NodeKind};
    use super::*;

    fn file() -> NodeKind {
        NodeKind::File(FileNode::empty())
    }

    fn dir() -> NodeKind {
        NodeKind::Directory(DirectoryNode::default())
    }

    #[test]
    fn create_lookup_and_path() {
        let mut ns = Namespace::new();
        let a = ns.create_child(ns.root(), "a", dir()).unwrap();
        let b = ns.create_child(a, "b", file()).unwrap();
        assert_eq!(ns.lookup(ns.root(), "a").unwrap(), a);
        assert_eq!(ns.lookup(a, "b").unwrap(), b);
        assert_eq!(ns.path_of(ns.root()), "/");
        assert_eq!(ns.path_of(a), "/a");
        assert_eq!(ns.path_of(b), "/a/b");
    }

    #[test]
    fn duplicate_name_is_rejected_without_mutation() {
        let mut ns = Namespace::new();
        ns.create_child(ns.root(), "a", file()).unwrap();
        let err = ns.create_child(ns.root(), "a", dir()).unwrap_err();
        assert_eq!(err, FsError::already_exists("/a"));
        // Still exactly one child named "a".
        let root = ns.node(ns.root());
        match &root.kind {
            NodeKind::Directory(d) => assert_eq!(d.children.len(), 1),
            NodeKind::File(_) => panic!("root is a directory"),
        }
    }

    #[test]
    fn root_identity_not_structural_equality() {
        let mut ns = Namespace::new();
        // An empty directory is structurally identical to the empty root,
        // but must not be mistaken for it.
        let empty = ns.create_child(ns.root(), "empty", dir()).unwrap();
        assert!(ns.is_root(ns.root()));
        assert!(!ns.is_root(empty));
    }

    #[test]
    fn remove_child_frees_whole_subtree_and_recycles_slots() {
        let mut ns = Namespace::new();
        let a = ns.create_child(ns.root(), "a", dir()).unwrap();
        ns.create_child(a, "f", file()).unwrap();
        ns.remove_child(ns.root(), "a").unwrap();
        assert_eq!(
            ns.lookup(ns.root(), "a").unwrap_err(),
            FsError::not_found("/a")
        );
        // Freed slots are reused by the next allocation.
        let b = ns.create_child(ns.root(), "b", file()).unwrap();
        assert!(b.index() <= 2);
    }

    #[test]
    fn remove_missing_child_is_not_found() {
        let mut ns = Namespace::new();
        assert_eq!(
            ns.remove_child(ns.root(), "ghost").unwrap_err(),
            FsError::not_found("/ghost")
        );
    }

    #[test]
    fn ancestor_check_walks_parent_links() {
        let mut ns = Namespace::new();
        let a = ns.create_child(ns.root(), "a", dir()).unwrap();
        let b = ns.create_child(a, "b", dir()).unwrap();
        assert!(ns.is_ancestor_or_self(a, b));
        assert!(ns.is_ancestor_or_self(b, b));
        assert!(!ns.is_ancestor_or_self(b, a));
        assert!(ns.is_ancestor_or_self(ns.root(), b));
    }
}
