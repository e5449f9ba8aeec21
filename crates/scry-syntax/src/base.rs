//! Shared base types for the arena syntax tree.

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`NodeArena`](crate::NodeArena).
///
/// `NodeIndex::NONE` marks an absent child (missing initializer, no else
/// branch, a parameter with a single name slot, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl FromIterator<NodeIndex> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeIndex>>(iter: I) -> Self {
        NodeList {
            nodes: iter.into_iter().collect(),
        }
    }
}
