//! Shared helpers for the traversal test suites

#![allow(dead_code)]

use std::cmp::Ordering;

/// Value ordered by `key` only; `tag` records provenance so tests can
/// observe which of two equal-keyed elements was emitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: u32,
    pub tag: char,
}

impl Tagged {
    pub fn new(key: u32, tag: char) -> Self {
        Self { key, tag }
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Assert `values` is in non-decreasing order.
pub fn assert_sorted<T: Ord + std::fmt::Debug>(values: &[T]) {
    for window in values.windows(2) {
        assert!(
            window[0] <= window[1],
            "out of order: {:?} before {:?}",
            window[0],
            window[1]
        );
    }
}

/// Sorted copy of `values` via the standard library's stable sort, the
/// reference the lazy merge must agree with.
pub fn stable_sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}
