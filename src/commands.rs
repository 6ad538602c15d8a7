//! Command API
//!
//! The only entry point that mutates a [`Namespace`]. Each operation
//! validates its preconditions first and only then applies the change, so
//! a failed command leaves the tree exactly as it was.
//!
//! `touch`, `mkdir`, `rm`, `rmdir`, `write`, and `read_file` address a
//! sibling of the cursor by plain name; `cd`, `cp`, and `mv` accept full
//! paths (absolute, relative, `..`, trailing `/`).

use crate::error::{FsError, Result};
use crate::meta::EntryKind;
use crate::path;
use crate::tree::node::{DirectoryNode, FileNode, NodeKind};
use crate::tree::Namespace;
use crate::types::NodeId;
use chrono::{DateTime, Local};
use tracing::debug;

/// One row of an `ls` listing, in directory insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Present iff the entry is a file.
    pub size: Option<u64>,
    pub created: DateTime<Local>,
}

impl Namespace {
    /// Create an empty file named `name` in the current directory.
    pub fn touch(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        let dir = self.cursor_dir();
        self.create_child(dir, name, NodeKind::File(FileNode::empty()))?;
        debug!(name, "created file");
        Ok(())
    }

    /// Create an empty directory named `name` in the current directory.
    pub fn mkdir(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        let dir = self.cursor_dir();
        self.create_child(dir, name, NodeKind::Directory(DirectoryNode::default()))?;
        debug!(name, "created directory");
        Ok(())
    }

    /// Move the cursor to the directory a path resolves to.
    pub fn cd(&mut self, path_str: &str) -> Result<()> {
        let dir = path::resolve_dir(self, path_str)?;
        self.change_cursor(dir);
        debug!(cwd = %self.pwd(), "changed directory");
        Ok(())
    }

    /// List the current directory in insertion order. The parent link is a
    /// back-reference, not a child, so it never appears here.
    pub fn ls(&self) -> Vec<DirEntry> {
        let dir = self.node(self.cursor_dir());
        let children = match &dir.kind {
            NodeKind::Directory(d) => &d.children,
            NodeKind::File(_) => return Vec::new(),
        };
        children
            .iter()
            .map(|(name, id)| {
                let node = self.node(*id);
                let (kind, size) = match &node.kind {
                    NodeKind::File(f) => (EntryKind::File, Some(f.size())),
                    NodeKind::Directory(_) => (EntryKind::Directory, None),
                };
                DirEntry {
                    name: name.clone(),
                    kind,
                    size,
                    created: node.created,
                }
            })
            .collect()
    }

    /// Canonical absolute path of the current directory.
    pub fn pwd(&self) -> String {
        self.path_of(self.cursor_dir())
    }

    /// Remove the file named `name` from the current directory.
    pub fn rm(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        let dir = self.cursor_dir();
        let id = self.lookup(dir, name)?;
        if self.is_dir(id) {
            return Err(FsError::is_a_directory(self.path_of(id)));
        }
        self.remove_child(dir, name)?;
        debug!(name, "removed file");
        Ok(())
    }

    /// Remove the directory named `name`, including everything beneath it.
    pub fn rmdir(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        let dir = self.cursor_dir();
        let id = self.lookup(dir, name)?;
        if !self.is_dir(id) {
            return Err(FsError::not_a_directory(self.path_of(id)));
        }
        self.remove_child(dir, name)?;
        debug!(name, "removed directory");
        Ok(())
    }

    /// Replace the content of the file named `name`. Its size follows the
    /// content; its creation timestamp is untouched.
    pub fn write(&mut self, name: &str, content: &str) -> Result<()> {
        validate_name(name)?;
        let dir = self.cursor_dir();
        let id = self.lookup(dir, name)?;
        if self.is_dir(id) {
            return Err(FsError::is_a_directory(self.path_of(id)));
        }
        match &mut self.node_mut(id).kind {
            NodeKind::File(f) => f.content = content.to_string(),
            NodeKind::Directory(_) => unreachable!("checked above"),
        }
        debug!(name, bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Content of the file named `name` in the current directory.
    pub fn read_file(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        let id = self.lookup(self.cursor_dir(), name)?;
        match &self.node(id).kind {
            NodeKind::File(f) => Ok(f.content.clone()),
            NodeKind::Directory(_) => Err(FsError::is_a_directory(self.path_of(id))),
        }
    }

    /// Copy the file at `src` to `dest`: an independent deep copy with a
    /// fresh creation timestamp and the source's size.
    pub fn cp(&mut self, src: &str, dest: &str) -> Result<()> {
        let src_id = self.resolve_source(src)?;
        let (file, src_name) = {
            let node = self.node(src_id);
            match &node.kind {
                NodeKind::File(f) => (f.clone(), node.name.clone()),
                NodeKind::Directory(_) => {
                    return Err(FsError::is_a_directory(self.path_of(src_id)));
                }
            }
        };
        let dest_res = path::resolve(self, dest)?;
        let dest_name = dest_res.name.unwrap_or(src_name);
        self.create_child(dest_res.dir, &dest_name, NodeKind::File(file))?;
        debug!(src, dest, "copied file");
        Ok(())
    }

    /// Relocate the node at `src` to `dest`, keeping its identity and
    /// creation timestamp. A destination naming an existing directory
    /// always absorbs the source under its own name; it is never a rename
    /// onto that directory. Moving a directory into its own subtree is
    /// rejected.
    pub fn mv(&mut self, src: &str, dest: &str) -> Result<()> {
        let src_res = path::resolve(self, src)?;
        let (src_parent, src_name, src_id) = match src_res.name {
            Some(name) => {
                let id = self
                    .lookup(src_res.dir, &name)
                    .map_err(|_| FsError::not_found(src))?;
                (src_res.dir, name, id)
            }
            None => {
                // The source path names a directory itself.
                let id = src_res.dir;
                let Some(parent) = self.parent_of(id) else {
                    return Err(FsError::invalid_argument("cannot move the root directory"));
                };
                (parent, self.node(id).name.clone(), id)
            }
        };

        let dest_res = path::resolve(self, dest)?;
        let mut dest_dir = dest_res.dir;
        let mut dest_name = dest_res.name.unwrap_or_else(|| src_name.clone());

        // Tie-break: a destination name that is an existing directory means
        // "into that directory, under the source's own name".
        if let Ok(existing) = self.lookup(dest_dir, &dest_name) {
            if self.is_dir(existing) {
                dest_dir = existing;
                dest_name = src_name.clone();
            }
        }

        if self.is_ancestor_or_self(src_id, dest_dir) {
            return Err(FsError::invalid_argument(format!(
                "cannot move '{}' into its own subtree",
                src
            )));
        }
        if self.lookup(dest_dir, &dest_name).is_ok() {
            return Err(FsError::already_exists(
                self.join_path(dest_dir, &dest_name),
            ));
        }

        self.detach(src_parent, &src_name)?;
        self.attach(dest_dir, &dest_name, src_id);
        debug!(src, dest, to = %self.path_of(src_id), "moved node");
        Ok(())
    }

    fn resolve_source(&self, src: &str) -> Result<NodeId> {
        let resolved = path::resolve(self, src)?;
        match resolved.name {
            Some(name) => self
                .lookup(resolved.dir, &name)
                .map_err(|_| FsError::not_found(src)),
            None => Ok(resolved.dir),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FsError::invalid_argument(format!("invalid name: '{}'", name)));
    }
    Ok(())
}
