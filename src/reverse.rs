use crate::cursor::Cursor;
use crate::source::{IndexedSource, Source};
use crate::step::Step;

/// Lazy stage that traverses a random-access source back to front
///
/// Requires [`IndexedSource`]: reversal needs to start from the far end
/// without traversing to it, so a sequential-only source is rejected at
/// compile time. The underlying data is never copied or reordered.
#[derive(Clone)]
pub struct Reversed<S> {
    source: S,
}

impl<S> Reversed<S> {
    pub fn new(source: S) -> Self {
        Reversed { source }
    }
}

impl<S> Source for Reversed<S>
where
    S: IndexedSource + Clone,
{
    type Item = S::Item;
    type Cursor = ReverseCursor<S>;

    fn cursor(&self) -> ReverseCursor<S> {
        ReverseCursor::new(self.source.clone())
    }
}

impl<S> IndexedSource for Reversed<S>
where
    S: IndexedSource + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> S::Item {
        self.source.get(self.source.len() - 1 - index)
    }
}

/// Cursor holding a descending index into a random-access source
///
/// Starts at the source length; each advance decrements and reads the
/// element at the new index, exhausting at zero.
pub struct ReverseCursor<S: IndexedSource> {
    source: S,
    remaining: usize,
}

impl<S: IndexedSource> ReverseCursor<S> {
    pub fn new(source: S) -> Self {
        let remaining = source.len();
        ReverseCursor { source, remaining }
    }
}

impl<S: IndexedSource> Cursor for ReverseCursor<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        if self.remaining == 0 {
            return Step::Exhausted;
        }
        self.remaining -= 1;
        Step::Yielded(self.source.get(self.remaining))
    }
}

/// Traverse `source` in reverse order
pub fn reverse<S>(source: S) -> Reversed<S>
where
    S: IndexedSource + Clone,
{
    Reversed::new(source)
}
