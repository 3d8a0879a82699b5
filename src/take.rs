use crate::cursor::Cursor;
use crate::source::{IndexedSource, Source};
use crate::step::Step;

/// Lazy stage that truncates a source after `count` elements
#[derive(Clone)]
pub struct Taken<S> {
    source: S,
    count: usize,
}

impl<S> Taken<S> {
    pub fn new(source: S, count: usize) -> Self {
        Taken { source, count }
    }
}

impl<S: Source> Source for Taken<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor::new(self.source.cursor(), self.count)
    }
}

impl<S: IndexedSource> IndexedSource for Taken<S> {
    fn len(&self) -> usize {
        self.count.min(self.source.len())
    }

    fn get(&self, index: usize) -> S::Item {
        self.source.get(index)
    }
}

/// Cursor that passes through at most `remaining` elements
///
/// Once the count reaches zero the inner cursor is never touched again: no
/// speculative pull happens past the limit, and a cursor built with a count
/// of zero never pulls at all. An early inner exhaustion zeroes the count so
/// later calls stay away from the inner cursor too.
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn new(inner: C, remaining: usize) -> Self {
        TakeCursor { inner, remaining }
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        if self.remaining == 0 {
            return Step::Exhausted;
        }
        self.remaining -= 1;
        match self.inner.advance() {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Exhausted => {
                self.remaining = 0;
                Step::Exhausted
            }
        }
    }
}

/// Truncate `source` after its first `count` elements
pub fn take<S: Source>(count: usize, source: S) -> Taken<S> {
    Taken::new(source, count)
}
