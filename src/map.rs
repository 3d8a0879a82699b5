use crate::cursor::Cursor;
use crate::source::{IndexedSource, Source};
use crate::step::Step;

/// Lazy stage that transforms every element of a source
///
/// `Mapped` is only a description; the transform runs one element at a time
/// as a traversal is driven, never ahead of demand.
#[derive(Clone)]
pub struct Mapped<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Mapped<S, F> {
    pub fn new(source: S, transform: F) -> Self {
        Mapped { source, transform }
    }
}

impl<S, F, U> Source for Mapped<S, F>
where
    S: Source,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor::new(self.source.cursor(), self.transform.clone())
    }
}

/// A pure transform preserves indexed access: element `i` of the mapped
/// sequence is the transform of element `i` of the inner one.
impl<S, F, U> IndexedSource for Mapped<S, F>
where
    S: IndexedSource,
    F: Fn(S::Item) -> U + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> U {
        (self.transform)(self.source.get(index))
    }
}

/// Cursor that applies a transform to each element pulled from an inner cursor
///
/// Exhaustion propagates unchanged. The transform must be pure and total
/// over reachable values; a panicking transform poisons the cursor.
pub struct MapCursor<C, F> {
    inner: C,
    transform: F,
}

impl<C, F> MapCursor<C, F> {
    pub fn new(inner: C, transform: F) -> Self {
        MapCursor { inner, transform }
    }
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Step<U> {
        self.inner.advance().map(&self.transform)
    }
}

/// Transform every element of `source` with `transform`
pub fn map<S, F, U>(transform: F, source: S) -> Mapped<S, F>
where
    S: Source,
    F: Fn(S::Item) -> U + Clone,
{
    Mapped::new(source, transform)
}
