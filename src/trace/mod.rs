//! Optional trace instrumentation
//!
//! A [`TraceSink`] receives hooks around every `next` call of a traced
//! iterator: one before the pull, one after a value is produced. The
//! adapter sits entirely outside the merge engine; attaching or removing
//! it changes nothing about sort order or consumption state.

use std::fmt;

/// Observer of iterator pulls.
///
/// Implementations must be purely observational: the adapter calls the
/// hooks around each pull and otherwise forwards everything unchanged.
pub trait TraceSink<T> {
    /// Called before each attempted pull, including the one that exhausts
    /// the iterator.
    fn before_next(&mut self);

    /// Called after a pull that produced a value.
    fn after_next(&mut self, item: &T);
}

/// Iterator adapter invoking a [`TraceSink`] around every pull.
#[derive(Debug)]
pub struct Traced<I, S> {
    inner: I,
    sink: S,
}

impl<I, S> Traced<I, S> {
    /// Attach `sink` to `inner`.
    pub fn new(inner: I, sink: S) -> Self {
        Self { inner, sink }
    }

    /// Detach the sink, returning the inner iterator and the sink.
    pub fn into_parts(self) -> (I, S) {
        (self.inner, self.sink)
    }
}

impl<I, S> Iterator for Traced<I, S>
where
    I: Iterator,
    S: TraceSink<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.sink.before_next();
        let item = self.inner.next()?;
        self.sink.after_next(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// [`TraceSink`] emitting `tracing` debug events for every pull.
#[derive(Debug, Default)]
pub struct LogSink {
    pulls: u64,
}

impl LogSink {
    /// Create a sink with its pull counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pulls observed so far.
    pub fn pulls(&self) -> u64 {
        self.pulls
    }
}

impl<T: fmt::Debug> TraceSink<T> for LogSink {
    fn before_next(&mut self) {
        self.pulls += 1;
        tracing::debug!(pull = self.pulls, "pulling next element");
    }

    fn after_next(&mut self, item: &T) {
        tracing::debug!(pull = self.pulls, value = ?item, "produced element");
    }
}
