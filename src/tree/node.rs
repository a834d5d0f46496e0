//! Partition-tree node representation
//!
//! Node = half-open interval [from, until) into the source list
//! Children come from the midpoint split: m = ⌊(from + until) / 2⌋
//!   Left child: [from, m)
//!   Right child: [m, until)
//! Shape depends only on the interval, never on element values.

use std::fmt;

/// Half-open index interval `[from, until)` into the source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct IndexRange {
    /// First index covered (inclusive).
    pub from: usize,

    /// First index past the interval (exclusive).
    pub until: usize,
}

impl IndexRange {
    /// Create the interval `[from, until)`.
    pub fn new(from: usize, until: usize) -> Self {
        Self { from, until }
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.until.saturating_sub(self.from)
    }

    /// Whether the interval covers no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from >= self.until
    }

    /// Whether the interval covers exactly one index.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    /// Split point: `⌊(from + until) / 2⌋`.
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.from + self.until) / 2
    }

    /// Split at the midpoint into `([from, mid), [mid, until))`.
    ///
    /// Both halves are non-empty whenever the interval covers at least two
    /// indices.
    pub fn split(&self) -> (IndexRange, IndexRange) {
        debug_assert!(self.len() >= 2, "interval of length < 2 has no split");

        let mid = self.midpoint();
        (
            IndexRange {
                from: self.from,
                until: mid,
            },
            IndexRange {
                from: mid,
                until: self.until,
            },
        )
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.until)
    }
}

/// Partition-tree node: a leaf covering one source index, or a merge node
/// owning two children over adjacent sub-ranges.
///
/// The node carries no element type; the tree is pure index arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum PartitionNode {
    /// Covers exactly one index; range `[index, index + 1)`.
    Leaf {
        /// The one source index this leaf yields.
        index: usize,
    },

    /// Combines the sorted output of two contiguous children.
    Merge {
        /// Union of the child ranges.
        range: IndexRange,
        /// Child covering `[range.from, mid)`.
        left: Box<PartitionNode>,
        /// Child covering `[mid, range.until)`.
        right: Box<PartitionNode>,
    },
}

impl PartitionNode {
    /// Build the partition tree for `range`.
    ///
    /// Returns `None` for an empty range. A unit range becomes a [`Leaf`];
    /// anything longer splits at the midpoint and recurses. If one side of a
    /// split comes back absent, the other side is promoted verbatim, so every
    /// live node covers a non-empty range. No element values are consulted.
    ///
    /// [`Leaf`]: PartitionNode::Leaf
    pub fn build(range: IndexRange) -> Option<PartitionNode> {
        if range.is_empty() {
            return None;
        }
        if range.is_unit() {
            return Some(PartitionNode::Leaf { index: range.from });
        }

        let (lo, hi) = range.split();
        match (Self::build(lo), Self::build(hi)) {
            (Some(left), Some(right)) => Some(PartitionNode::Merge {
                range,
                left: Box::new(left),
                right: Box::new(right),
            }),
            // A degenerate split collapses by promoting the surviving side.
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }

    /// Interval of source indices this node covers.
    pub fn range(&self) -> IndexRange {
        match self {
            PartitionNode::Leaf { index } => IndexRange::new(*index, *index + 1),
            PartitionNode::Merge { range, .. } => *range,
        }
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    /// Longest path from this node down to a leaf.
    ///
    /// The midpoint split keeps this at `⌈log2(range.len())⌉`.
    pub fn depth(&self) -> usize {
        match self {
            PartitionNode::Leaf { .. } => 0,
            PartitionNode::Merge { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for PartitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionNode::Leaf { index } => write!(f, "[{index}]"),
            PartitionNode::Merge { range, .. } => write!(f, "{range}"),
        }
    }
}
