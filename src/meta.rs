//! Metadata views over the namespace.
//!
//! Creation time lives on each node and file size derives from content, so
//! the absolute-path key is computed on demand by walking parent links. A
//! move or rename therefore never re-keys anything: the old path simply
//! stops resolving and the new one resolves to the same node, timestamp
//! intact — for the moved node and every descendant alike.

use crate::error::{FsError, Result};
use crate::path;
use crate::tree::node::NodeKind;
use crate::tree::Namespace;
use chrono::{DateTime, Local};

/// Kind of a namespace entry as reported by metadata queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Snapshot of one node's metadata. `size` is present iff the node is a
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub path: String,
    pub kind: EntryKind,
    pub size: Option<u64>,
    pub created: DateTime<Local>,
}

impl Namespace {
    /// Metadata for the node a path resolves to.
    pub fn stat(&self, path_str: &str) -> Result<Metadata> {
        let id = path::resolve_node(self, path_str)?;
        let node = self.node(id);
        let (kind, size) = match &node.kind {
            NodeKind::File(f) => (EntryKind::File, Some(f.size())),
            NodeKind::Directory(_) => (EntryKind::Directory, None),
        };
        Ok(Metadata {
            path: self.path_of(id),
            kind,
            size,
            created: node.created,
        })
    }

    /// Byte size of the file at a path. Directories have no size entry.
    pub fn size_of(&self, path_str: &str) -> Result<u64> {
        let id = path::resolve_node(self, path_str)?;
        match &self.node(id).kind {
            NodeKind::File(f) => Ok(f.size()),
            NodeKind::Directory(_) => Err(FsError::is_a_directory(self.path_of(id))),
        }
    }

    /// Creation timestamp of the node at a path, fixed for the node's
    /// whole lifetime.
    pub fn created_at(&self, path_str: &str) -> Result<DateTime<Local>> {
        let id = path::resolve_node(self, path_str)?;
        Ok(self.node(id).created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_reports_kind_size_and_path() {
        let mut ns = Namespace::new();
        ns.mkdir("d").unwrap();
        ns.touch("f").unwrap();
        ns.write("f", "abc").unwrap();

        let d = ns.stat("d").unwrap();
        assert_eq!(d.kind, EntryKind::Directory);
        assert_eq!(d.size, None);
        assert_eq!(d.path, "/d");

        let f = ns.stat("/f").unwrap();
        assert_eq!(f.kind, EntryKind::File);
        assert_eq!(f.size, Some(3));
        assert_eq!(f.path, "/f");
    }

    #[test]
    fn size_of_rejects_directories() {
        let mut ns = Namespace::new();
        ns.mkdir("d").unwrap();
        assert_eq!(ns.size_of("d").unwrap_err(), FsError::is_a_directory("/d"));
    }

    #[test]
    fn metadata_queries_miss_on_unknown_paths() {
        let ns = Namespace::new();
        assert_eq!(
            ns.created_at("/ghost").unwrap_err(),
            FsError::not_found("/ghost")
        );
        assert_eq!(
            ns.size_of("/ghost").unwrap_err(),
            FsError::not_found("/ghost")
        );
    }
}
