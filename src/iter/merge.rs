//! Per-node traversal iterators
//!
//! Each traversal turns the partition tree into an owned iterator tree:
//! a leaf reads its single index through the ledger, a merge pair wraps
//! both child iterators in lookahead buffers and pulls the smaller
//! preview, taking left on ties. The left bias is what keeps the merge
//! stable: among equal keys, the element from the left sub-range (the
//! smaller original index) is emitted first.

use std::sync::Arc;

use crate::iter::BufferedIterator;
use crate::ledger::ConsumptionLedger;
use crate::tree::PartitionNode;

/// Traversal iterator for one partition-tree node.
///
/// `T: Ord` is carried on the type itself: the lookahead buffers inside
/// every merge pair require their inner iterator to be an `Iterator`,
/// which this enum only is under `Ord`.
#[derive(Debug)]
pub(crate) enum NodeIter<'s, T: Ord> {
    Leaf(LeafIter<'s, T>),
    Merge(Box<MergePairIter<'s, T>>),
}

impl<'s, T: Ord> NodeIter<'s, T> {
    /// Build the iterator tree for `node`, scoped to one ledger instance.
    ///
    /// Child iterators are owned exclusively by their merge pair; only the
    /// ledger is shared, and only within this one traversal.
    pub(crate) fn new(node: &PartitionNode, ledger: &Arc<ConsumptionLedger<'s, T>>) -> Self {
        match node {
            PartitionNode::Leaf { index } => NodeIter::Leaf(LeafIter {
                ledger: Arc::clone(ledger),
                index: *index,
            }),
            PartitionNode::Merge { left, right, .. } => {
                NodeIter::Merge(Box::new(MergePairIter {
                    left: BufferedIterator::new(NodeIter::new(left, ledger)),
                    right: BufferedIterator::new(NodeIter::new(right, ledger)),
                }))
            }
        }
    }
}

impl<'s, T: Ord> Iterator for NodeIter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        match self {
            NodeIter::Leaf(leaf) => leaf.next(),
            NodeIter::Merge(pair) => pair.next(),
        }
    }
}

/// Yields the element at one source index, exactly once per traversal.
#[derive(Debug)]
pub(crate) struct LeafIter<'s, T> {
    ledger: Arc<ConsumptionLedger<'s, T>>,
    index: usize,
}

impl<'s, T> Iterator for LeafIter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        if self.ledger.consumed(self.index) {
            return None;
        }
        match self.ledger.take(self.index) {
            Ok(item) => Some(item),
            // Unreachable under a correctly built tree: each index belongs
            // to exactly one leaf. A failed take here is a fatal defect.
            Err(err) => panic!("partition-tree invariant violated: {err}"),
        }
    }
}

/// Two-way merge of a pair of sorted child iterators.
#[derive(Debug)]
pub(crate) struct MergePairIter<'s, T: Ord> {
    left: BufferedIterator<NodeIter<'s, T>>,
    right: BufferedIterator<NodeIter<'s, T>>,
}

impl<'s, T: Ord> Iterator for MergePairIter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        // Copy the previewed borrows out so both buffers stay available
        // for the consuming pull below.
        let ahead_left = self.left.preview_next().copied();
        let ahead_right = self.right.preview_next().copied();

        let pull_left = match (ahead_left, ahead_right) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            // `<=` takes left on ties, preserving original order.
            (Some(left), Some(right)) => left <= right,
        };

        if pull_left {
            self.left.next()
        } else {
            self.right.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::IndexRange;

    fn traversal<T: Ord>(items: &[T]) -> NodeIter<'_, T> {
        let root = PartitionNode::build(IndexRange::new(0, items.len()))
            .expect("non-empty range builds a node");
        let ledger = Arc::new(ConsumptionLedger::new(items));
        NodeIter::new(&root, &ledger)
    }

    #[test]
    fn leaf_yields_once_then_stays_exhausted() {
        let items = vec![42];
        let mut iter = traversal(&items);

        assert_eq!(iter.next(), Some(&42));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn merge_emits_in_non_decreasing_order() {
        let items = vec![5, 3, 1, 4, 2];
        let emitted: Vec<i32> = traversal(&items).copied().collect();

        assert_eq!(emitted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn exhausted_side_drains_the_other() {
        // Left sub-range [0, 1) drains first; remaining pulls come from
        // the right side only.
        let items = vec![1, 2, 3];
        let emitted: Vec<i32> = traversal(&items).copied().collect();

        assert_eq!(emitted, vec![1, 2, 3]);
    }

    #[test]
    fn ties_pull_from_the_left_sub_range() {
        // Keys compare equal; the payload records which leaf each came
        // from. Ord on tuples would break the tie by payload, so compare
        // by key only via a wrapper.
        #[derive(Debug, PartialEq, Eq)]
        struct Keyed(u32, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let items = vec![Keyed(2, 'a'), Keyed(2, 'b'), Keyed(1, 'c')];
        let tags: Vec<char> = traversal(&items).map(|keyed| keyed.1).collect();

        assert_eq!(tags, vec!['c', 'a', 'b']);
    }
}
