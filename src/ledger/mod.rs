//! Per-traversal consumption ledger
//!
//! One ledger instance exists per traversal. It borrows the shared
//! read-only source list and records, per index, whether a leaf iterator
//! has already read it. Each index belongs to exactly one leaf, so under
//! a correctly built partition tree no index is taken twice; the ledger
//! still guards every index independently so a second take is caught as
//! an invariant breach instead of silently duplicating an element.
//!
//! Space: one flag per source index, O(n) total.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use thiserror::Error;

/// Errors raised by guarded ledger reads.
///
/// Both variants are defensive: a correctly shaped partition tree never
/// produces an out-of-range or repeated index, so either error is a
/// programming defect in the caller, not a recoverable condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// Index past the end of the source list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the list the ledger is bound to.
        len: usize,
    },

    /// Second read of an index within one traversal.
    #[error("index {index} already consumed by this traversal")]
    AlreadyConsumed {
        /// Index whose flag was already set.
        index: usize,
    },
}

/// Exactly-once read state for one traversal of a source list.
///
/// Flags start unset and flip via per-index test-and-set; there is no
/// ledger-wide lock, so reads of unrelated indices never contend. The
/// ledger only hands out borrows of the list — elements are never moved.
#[derive(Debug)]
pub struct ConsumptionLedger<'s, T> {
    items: &'s [T],
    flags: Box<[AtomicBool]>,
    consumed_count: AtomicUsize,
}

impl<'s, T> ConsumptionLedger<'s, T> {
    /// Create a fresh ledger over `items` with every index unconsumed.
    pub fn new(items: &'s [T]) -> Self {
        let flags = (0..items.len())
            .map(|_| AtomicBool::new(false))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            items,
            flags,
            consumed_count: AtomicUsize::new(0),
        }
    }

    /// Guarded, exactly-once read of the element at `index`.
    ///
    /// Atomically sets the consumption flag and returns the element if the
    /// flag was unset. A set flag yields [`LedgerError::AlreadyConsumed`],
    /// which leaf iterators escalate to a panic.
    pub fn take(&self, index: usize) -> Result<&'s T, LedgerError> {
        let flag = self
            .flags
            .get(index)
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;

        if flag.swap(true, Ordering::AcqRel) {
            return Err(LedgerError::AlreadyConsumed { index });
        }

        self.consumed_count.fetch_add(1, Ordering::AcqRel);
        Ok(&self.items[index])
    }

    /// Non-mutating peek of the consumption flag at `index`.
    ///
    /// Indices outside the list count as consumed, so iterators probing
    /// them see exhaustion rather than a panic.
    pub fn consumed(&self, index: usize) -> bool {
        self.flags
            .get(index)
            .map_or(true, |flag| flag.load(Ordering::Acquire))
    }

    /// Length of the source list this ledger is bound to.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of indices not yet consumed by this traversal.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.consumed_count.load(Ordering::Acquire)
    }
}
