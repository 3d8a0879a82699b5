use crate::cursor::Cursor;
use crate::source::Source;
use crate::step::Step;

/// Lazy stage that keeps only the elements a predicate accepts
///
/// Filtering destroys random access (the index of the n-th surviving element
/// is unknowable without traversal), so `Filtered` implements only the
/// sequential [`Source`] capability.
#[derive(Clone)]
pub struct Filtered<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Filtered { source, predicate }
    }
}

impl<S, P> Source for Filtered<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor::new(self.source.cursor(), self.predicate.clone())
    }
}

/// Cursor that pulls from an inner cursor until the predicate accepts
///
/// One downstream yield may take several upstream pulls, bounded by the
/// run-length of rejected elements; over a full traversal the upstream is
/// pulled exactly once per element.
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        FilterCursor { inner, predicate }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        loop {
            match self.inner.advance() {
                Step::Yielded(value) => {
                    if (self.predicate)(&value) {
                        return Step::Yielded(value);
                    }
                }
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

/// Keep the elements of `source` that `predicate` accepts
pub fn filter<S, P>(predicate: P, source: S) -> Filtered<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool + Clone,
{
    Filtered::new(source, predicate)
}
