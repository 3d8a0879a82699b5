use crate::cursor::Cursor;
use crate::source::{IndexedSource, Source};
use crate::step::Step;

/// Lazy stage that discards the first `count` elements of a source
#[derive(Clone)]
pub struct Skipped<S> {
    source: S,
    count: usize,
}

impl<S> Skipped<S> {
    pub fn new(source: S, count: usize) -> Self {
        Skipped { source, count }
    }
}

impl<S: Source> Source for Skipped<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor::new(self.source.cursor(), self.count)
    }
}

impl<S: IndexedSource> IndexedSource for Skipped<S> {
    fn len(&self) -> usize {
        self.source.len().saturating_sub(self.count)
    }

    fn get(&self, index: usize) -> S::Item {
        self.source.get(index + self.count)
    }
}

/// Cursor that drops a prefix of the inner cursor, then passes pulls through
///
/// The prefix is discarded on the first `advance`, not at construction, so
/// an undriven traversal still costs nothing.
pub struct SkipCursor<C> {
    inner: C,
    pending: usize,
}

impl<C> SkipCursor<C> {
    pub fn new(inner: C, pending: usize) -> Self {
        SkipCursor { inner, pending }
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.inner.advance().is_exhausted() {
                self.pending = 0;
                return Step::Exhausted;
            }
        }
        self.inner.advance()
    }
}

/// Discard the first `count` elements of `source`
pub fn skip<S: Source>(count: usize, source: S) -> Skipped<S> {
    Skipped::new(source, count)
}
