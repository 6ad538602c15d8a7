//! Core types for the arbor namespace.

/// NodeId: stable arena handle addressing a node in a namespace.
///
/// Identity questions (root detection, cycle checks) compare handles,
/// never node contents — two distinct empty directories are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, for diagnostics.
    pub fn index(self) -> usize {
        self.0
    }
}
