//! Traversal iterators
//!
//! One traversal = one owned iterator tree mirroring the partition tree,
//! with a lookahead buffer at every merge point. All state lives in the
//! iterators and the traversal's ledger instance; the partition tree and
//! the source list stay untouched.

mod buffered;
pub(crate) mod merge;
mod sorted;

pub use buffered::BufferedIterator;
pub use sorted::SortedIter;
