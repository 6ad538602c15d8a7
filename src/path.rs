//! Path Resolver
//!
//! Turns a path string into (containing directory, final name) by walking
//! the tree from the root for absolute paths or from the cursor otherwise.
//! The leaf itself is not required to exist; callers decide whether it must.

use crate::error::{FsError, Result};
use crate::tree::Namespace;
use crate::types::NodeId;

/// Outcome of resolving a path.
///
/// `name` is `None` when the path names a directory itself rather than an
/// entry inside one: `/`, a path ending in `/`, or a path whose final
/// segment is `.` or `..`. For `mv` destinations this means "place the
/// source, under its own name, inside this directory".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub dir: NodeId,
    pub name: Option<String>,
}

/// Resolve a path to its containing directory and leaf name.
///
/// Every segment before the last must name an existing directory; `..`
/// steps to the parent (a no-op at the root) and empty segments are
/// skipped, so `/a//b` and `/a/b` resolve alike.
pub fn resolve(ns: &Namespace, path: &str) -> Result<Resolved> {
    if path.is_empty() {
        return Err(FsError::invalid_argument("empty path"));
    }
    let mut current = if path.starts_with('/') {
        ns.root()
    } else {
        ns.cursor_dir()
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((&leaf, inner)) = segments.split_last() else {
        // "/" or a run of slashes: the start directory itself.
        return Ok(Resolved {
            dir: current,
            name: None,
        });
    };
    for &seg in inner {
        current = step_into(ns, current, seg, path)?;
    }
    if path.ends_with('/') || leaf == "." || leaf == ".." {
        let dir = step_into(ns, current, leaf, path)?;
        return Ok(Resolved { dir, name: None });
    }
    Ok(Resolved {
        dir: current,
        name: Some(leaf.to_string()),
    })
}

/// Resolve a path to an existing node of any kind.
pub fn resolve_node(ns: &Namespace, path: &str) -> Result<NodeId> {
    let resolved = resolve(ns, path)?;
    match resolved.name {
        None => Ok(resolved.dir),
        Some(name) => ns
            .lookup(resolved.dir, &name)
            .map_err(|_| FsError::not_found(path)),
    }
}

/// Resolve a path that must name an existing directory.
pub fn resolve_dir(ns: &Namespace, path: &str) -> Result<NodeId> {
    let id = resolve_node(ns, path)?;
    if ns.is_dir(id) {
        Ok(id)
    } else {
        Err(FsError::not_a_directory(ns.path_of(id)))
    }
}

fn step_into(ns: &Namespace, current: NodeId, segment: &str, full_path: &str) -> Result<NodeId> {
    match segment {
        "." => Ok(current),
        ".." => Ok(ns.parent_of(current).unwrap_or(current)),
        name => {
            let child = ns
                .lookup(current, name)
                .map_err(|_| FsError::not_found(full_path))?;
            if ns.is_dir(child) {
                Ok(child)
            } else {
                Err(FsError::not_a_directory(ns.path_of(child)))
            }
        }
    }
}
