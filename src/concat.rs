use log::trace;

use crate::cursor::Cursor;
use crate::source::{IndexedSource, Source};
use crate::step::Step;

/// Lazy stage that chains two sources end to end
///
/// Binary on purpose: `a.concat(b).concat(c)` composes the ordered n-ary
/// form the same way nested stages compose everywhere else in the crate.
#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Concat { first, second }
    }
}

impl<A, B> Source for Concat<A, B>
where
    A: Source,
    B: Source<Item = A::Item> + Clone,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B>;

    fn cursor(&self) -> Self::Cursor {
        ConcatCursor::new(self.first.cursor(), self.second.clone())
    }
}

impl<A, B> IndexedSource for Concat<A, B>
where
    A: IndexedSource,
    B: IndexedSource<Item = A::Item> + Clone,
{
    fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    fn get(&self, index: usize) -> A::Item {
        let boundary = self.first.len();
        if index < boundary {
            self.first.get(index)
        } else {
            self.second.get(index - boundary)
        }
    }
}

/// Cursor that drains the first source fully before touching the second
///
/// The second source is carried as an unconstructed description; its cursor
/// is built only at the moment the first cursor reports exhaustion, and the
/// switch retries within the same `advance` call.
pub struct ConcatCursor<C, B: Source> {
    state: ConcatState<C, B>,
}

enum ConcatState<C, B: Source> {
    /// Driving the first cursor; the second source is not yet materialized
    First { active: C, pending: B },
    /// First source exhausted; driving the second cursor
    Second(B::Cursor),
    /// Placeholder held only while the switch is in flight; observable
    /// afterwards only if constructing the second cursor panicked
    Switching,
}

impl<C, B: Source> ConcatCursor<C, B> {
    pub fn new(active: C, pending: B) -> Self {
        ConcatCursor {
            state: ConcatState::First { active, pending },
        }
    }
}

impl<C, B> Cursor for ConcatCursor<C, B>
where
    C: Cursor,
    B: Source<Item = C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        loop {
            match &mut self.state {
                ConcatState::First { active, .. } => match active.advance() {
                    Step::Yielded(value) => return Step::Yielded(value),
                    Step::Exhausted => {
                        let state = std::mem::replace(&mut self.state, ConcatState::Switching);
                        if let ConcatState::First { pending, .. } = state {
                            trace!("first source exhausted, constructing successor cursor");
                            self.state = ConcatState::Second(pending.cursor());
                        }
                    }
                },
                ConcatState::Second(active) => return active.advance(),
                ConcatState::Switching => return Step::Exhausted,
            }
        }
    }
}

/// Chain `second` after `first`, preserving order
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Source,
    B: Source<Item = A::Item> + Clone,
{
    Concat::new(first, second)
}
