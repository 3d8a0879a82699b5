use crate::step::Step;

/// Generic pull handle for lazy sequence traversal
///
/// A cursor is a single-use, stateful handle over a sequence of elements.
/// Each call to [`advance`] performs exactly one step of resumed work and
/// produces at most one element. Cursors are minted fresh per traversal by a
/// [`Source`](crate::source::Source) and are never reset once started.
///
/// # Contract
///
/// - [`Step::Exhausted`] is sticky: once a cursor has reported it, every
///   later call reports it too.
/// - Nothing is computed ahead of demand. A consumer cancels a traversal by
///   simply not calling `advance` again.
/// - If a caller-supplied function panics inside `advance`, the panic
///   propagates unchanged and the cursor is poisoned; it must not be
///   advanced again.
///
/// [`advance`]: Cursor::advance
pub trait Cursor {
    /// The type of elements this cursor produces
    type Item;

    /// Perform one step: yield the next element or signal exhaustion
    fn advance(&mut self) -> Step<Self::Item>;

    /// Bridge into the standard iterator machinery, consuming the cursor
    ///
    /// The resulting iterator drains the cursor one `advance` per `next`,
    /// so `collect`, `for`, and friends all stay single-pass and demand
    /// driven.
    fn into_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

/// Iterator adapter over any [`Cursor`]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        self.cursor.advance().into_option()
    }
}
