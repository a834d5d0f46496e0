//! One-slot lookahead wrapper
//!
//! The only primitive the merge protocol needs beyond `Iterator`: preview
//! the next element without consuming it. The slot holds at most one
//! element pulled early from the inner iterator; `next` drains the slot
//! before delegating again.

use std::fmt;
use std::iter::FusedIterator;

/// Forward iterator with a repeatable one-element preview.
pub struct BufferedIterator<I: Iterator> {
    inner: I,
    buffer: Option<I::Item>,
}

impl<I: Iterator> BufferedIterator<I> {
    /// Wrap `inner`, starting with an empty lookahead slot.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            buffer: None,
        }
    }

    /// Borrow the next element without consuming it.
    ///
    /// Idempotent: repeated calls without an intervening [`next`] return
    /// the identical cached element. `None` once the iterator is exhausted.
    ///
    /// [`next`]: Iterator::next
    pub fn preview_next(&mut self) -> Option<&I::Item> {
        if self.buffer.is_none() {
            self.buffer = self.inner.next();
        }
        self.buffer.as_ref()
    }

    /// Whether an element remains, cached or not.
    pub fn has_next(&mut self) -> bool {
        self.preview_next().is_some()
    }
}

impl<I: Iterator> Iterator for BufferedIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.buffer.take().or_else(|| self.inner.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.buffer.is_some());
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|bound| bound.checked_add(buffered)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for BufferedIterator<I> {}

impl<I> fmt::Debug for BufferedIterator<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedIterator")
            .field("inner", &self.inner)
            .field("buffer", &self.buffer)
            .finish()
    }
}
