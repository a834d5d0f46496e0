//! Partition tree over index ranges
//!
//! Built once per input list by midpoint recursion over `[0, n)`.
//! The tree is pure index arithmetic: no element values are consulted,
//! so the shape depends only on n. Height is ⌈log2(n)⌉ and every live
//! node covers a non-empty range (empty splits promote their sibling).
//!
//! Nodes are immutable after construction and shared read-only by every
//! traversal; each traversal mints its own iterator tree from the nodes.

mod node;

pub use node::{IndexRange, PartitionNode};
