//! Outer traversal iterator
//!
//! The handle returned by [`MergeSequence::traverse`]: a forward-only
//! iterator yielding borrows in non-decreasing order. It owns the
//! traversal's iterator tree and counts its own emissions — the ledger's
//! consumed count runs ahead of emission, because every merge point may
//! hold a previewed element in its lookahead slot.
//!
//! [`MergeSequence::traverse`]: crate::MergeSequence::traverse

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::iter::merge::NodeIter;
use crate::ledger::ConsumptionLedger;
use crate::tree::PartitionNode;

/// Forward iterator over one sorted traversal of a [`MergeSequence`].
///
/// Abandoning the iterator mid-traversal needs no cleanup: dropping it
/// drops the ledger instance with no effect on other traversals.
///
/// [`MergeSequence`]: crate::MergeSequence
pub struct SortedIter<'s, T: Ord> {
    root: NodeIter<'s, T>,
    remaining: usize,
}

impl<'s, T: Ord> SortedIter<'s, T> {
    pub(crate) fn new(node: &PartitionNode, ledger: Arc<ConsumptionLedger<'s, T>>) -> Self {
        let remaining = ledger.len();
        Self {
            root: NodeIter::new(node, &ledger),
            remaining,
        }
    }

    /// Whether another element remains in this traversal.
    ///
    /// Checking first is how callers avoid pulling past the end; `next`
    /// past the end returns `None` rather than failing.
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Number of elements this traversal has not yet emitted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'s, T: Ord> Iterator for SortedIter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        let item = self.root.next();
        if item.is_some() {
            self.remaining -= 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'s, T: Ord> ExactSizeIterator for SortedIter<'s, T> {}
impl<'s, T: Ord> FusedIterator for SortedIter<'s, T> {}

impl<'s, T: Ord> fmt::Debug for SortedIter<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::MergeSequence;

    #[test]
    fn yields_exactly_len_elements() {
        let sequence = MergeSequence::build(vec![4, 2, 3, 1]).unwrap();
        let mut iter = sequence.traverse();

        for expected_remaining in (1..=4).rev() {
            assert_eq!(iter.remaining(), expected_remaining);
            assert!(iter.has_next());
            assert!(iter.next().is_some());
        }

        assert!(!iter.has_next());
        assert_eq!(iter.remaining(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn size_hint_tracks_emissions_not_ledger_state() {
        let sequence = MergeSequence::build(vec![2, 1, 3]).unwrap();
        let mut iter = sequence.traverse();

        assert_eq!(iter.size_hint(), (3, Some(3)));
        // The first pull previews (and so consumes from the ledger)
        // elements that have not been emitted yet; the hint must count
        // emissions only.
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn abandoned_traversal_leaves_others_untouched() {
        let sequence = MergeSequence::build(vec![3, 1, 2]).unwrap();

        let mut abandoned = sequence.traverse();
        assert_eq!(abandoned.next(), Some(&1));
        drop(abandoned);

        let complete: Vec<i32> = sequence.traverse().copied().collect();
        assert_eq!(complete, vec![1, 2, 3]);
    }
}
