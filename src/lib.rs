//! # Lazy merge-sort sequences
//!
//! Build an immutable partition tree over a list once, then pull sorted
//! traversals on demand — no auxiliary sorted array is ever materialized.
//!
//! ## How it works
//!
//! 1. **Partition tree**: midpoint recursion over `[0, n)` yields a
//!    balanced binary tree of index ranges, independent of element values
//! 2. **Consumption ledger**: each traversal gets a fresh per-index
//!    exactly-once read guard over the shared list
//! 3. **Lazy merge**: each pull descends the iterator tree, comparing
//!    one-slot lookaheads at every merge point, taking left on ties
//!
//! Cost per full traversal: O(n log n) comparisons, O(log n) live
//! iterators, O(n) ledger memory. The merge is stable.
//!
//! ## Usage Example
//!
//! ```
//! use mergeseq::MergeSequence;
//!
//! let sequence = MergeSequence::build(vec![5, 3, 1, 4, 2]).expect("non-empty");
//!
//! let sorted: Vec<i32> = sequence.traverse().copied().collect();
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//!
//! // Traversals are independent and restartable.
//! let again: Vec<i32> = sequence.traverse().copied().collect();
//! assert_eq!(again, sorted);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements a layer of the engine
pub mod tree;   // Partition tree over index ranges
pub mod ledger; // Per-traversal exactly-once consumption state
pub mod iter;   // Buffered lookahead and the merge iterators
pub mod trace;  // Optional trace-event instrumentation

// Re-exports for convenience
pub use iter::{BufferedIterator, SortedIter};
pub use ledger::{ConsumptionLedger, LedgerError};
pub use trace::{LogSink, TraceSink, Traced};
pub use tree::{IndexRange, PartitionNode};

use std::sync::Arc;

/// A list paired with its partition tree, ready to be traversed in
/// sorted order any number of times.
///
/// Built once via [`build`]; afterwards both the list and the tree are
/// read-only and may be shared freely. Every [`traverse`] call mints a
/// fresh [`ConsumptionLedger`] instance, so traversals never interfere,
/// including concurrent ones.
///
/// No ordering is required to build — the tree is pure index arithmetic.
/// Only [`traverse`] asks for `T: Ord`.
///
/// [`build`]: MergeSequence::build
/// [`traverse`]: MergeSequence::traverse
#[derive(Debug, Clone)]
pub struct MergeSequence<T> {
    items: Vec<T>,
    root: PartitionNode,
}

impl<T> MergeSequence<T> {
    /// Build the partition tree over `items`.
    ///
    /// Returns `None` iff `items` is empty — the one input with nothing
    /// to traverse.
    pub fn build(items: Vec<T>) -> Option<Self> {
        let root = PartitionNode::build(IndexRange::new(0, items.len()))?;
        Some(Self { items, root })
    }

    /// Number of elements in the underlying list (always at least one).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the underlying list is empty.
    ///
    /// Always `false`: empty input never builds a sequence.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The underlying list, in original (unsorted) order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index range covered by the tree: `[0, len)`.
    pub fn range(&self) -> IndexRange {
        self.root.range()
    }

    /// Height of the partition tree: `⌈log2(len)⌉`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Root node of the partition tree.
    pub fn root(&self) -> &PartitionNode {
        &self.root
    }
}

impl<T: Ord> MergeSequence<T> {
    /// Start a fresh traversal yielding `&T` in non-decreasing order.
    ///
    /// Each call allocates a new ledger instance, so the returned
    /// iterator observes the full list regardless of what any other
    /// traversal has consumed.
    pub fn traverse(&self) -> SortedIter<'_, T> {
        let ledger = Arc::new(ConsumptionLedger::new(&self.items));
        SortedIter::new(&self.root, ledger)
    }
}

impl<'s, T: Ord> IntoIterator for &'s MergeSequence<T> {
    type Item = &'s T;
    type IntoIter = SortedIter<'s, T>;

    fn into_iter(self) -> SortedIter<'s, T> {
        self.traverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_builds_nothing() {
        assert!(MergeSequence::<i32>::build(Vec::new()).is_none());
    }

    #[test]
    fn singleton_traverses_once() {
        let sequence = MergeSequence::build(vec![9]).unwrap();
        let mut iter = sequence.traverse();

        assert_eq!(iter.next(), Some(&9));
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn traversal_sorts_without_touching_the_source() {
        let sequence = MergeSequence::build(vec![5, 3, 1, 4, 2]).unwrap();

        let sorted: Vec<i32> = sequence.traverse().copied().collect();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(sequence.items(), &[5, 3, 1, 4, 2]);
    }

    #[test]
    fn structure_matches_the_length() {
        let sequence = MergeSequence::build(vec![0u8; 8]).unwrap();

        assert_eq!(sequence.len(), 8);
        assert_eq!(sequence.range(), IndexRange::new(0, 8));
        assert_eq!(sequence.depth(), 3);
        assert!(!sequence.root().is_leaf());
    }

    #[test]
    fn for_loop_over_a_reference_traverses() {
        let sequence = MergeSequence::build(vec![2, 1]).unwrap();
        let mut seen = Vec::new();

        for item in &sequence {
            seen.push(*item);
        }

        assert_eq!(seen, vec![1, 2]);
    }
}
