//! Terminal reducers: consume a cursor down to a final value.
//!
//! Every function here takes the cursor last and by value: a terminal run is
//! the one and only traversal that cursor will ever make. All of them are
//! free functions usable on any [`Cursor`], independent of
//! [`Chain`](crate::chain::Chain).

use log::trace;

use crate::cursor::Cursor;
use crate::filter::FilterCursor;
use crate::map::MapCursor;
use crate::step::Step;
use crate::take::TakeCursor;

/// Pull exactly one element; the cursor is never advanced a second time
pub fn head<C: Cursor>(mut cursor: C) -> Option<C::Item> {
    cursor.advance().into_option()
}

/// First element the predicate accepts, in traversal order
///
/// Built as `head` of a filter stage, so the cost is proportional to the
/// index of the first match rather than to the sequence length.
pub fn find<C, P>(predicate: P, cursor: C) -> Option<C::Item>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    head(FilterCursor::new(cursor, predicate))
}

/// Strict left fold: drives the cursor to exhaustion, no short-circuit
pub fn reduce<C, A, F>(combine: F, seed: A, mut cursor: C) -> A
where
    C: Cursor,
    F: Fn(A, C::Item) -> A,
{
    let mut accumulator = seed;
    let mut pulled = 0usize;
    loop {
        match cursor.advance() {
            Step::Yielded(value) => {
                accumulator = combine(accumulator, value);
                pulled += 1;
            }
            Step::Exhausted => {
                trace!("fold exhausted its input after {pulled} elements");
                return accumulator;
            }
        }
    }
}

/// Shared generalization of [`every`] and [`some`]
///
/// Maps each element to a boolean verdict, filters for the decisive value
/// `stop_when`, keeps at most one such verdict, and folds it into `seed`
/// with `combine`. Pulling stops as soon as a decisive element is seen;
/// an indecisive sequence is exhausted and leaves the seed untouched.
pub fn accumulate_with<C, P, F, A>(
    combine: F,
    seed: A,
    stop_when: bool,
    predicate: P,
    cursor: C,
) -> A
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
    F: Fn(A, bool) -> A,
{
    let verdicts = MapCursor::new(cursor, predicate);
    let decisive = FilterCursor::new(verdicts, move |verdict: &bool| *verdict == stop_when);
    reduce(combine, seed, TakeCursor::new(decisive, 1))
}

/// True when every element satisfies the predicate
///
/// Stops pulling at the first failing element; only an all-satisfying
/// sequence is traversed in full.
pub fn every<C, P>(predicate: P, cursor: C) -> bool
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
{
    accumulate_with(|accumulator, verdict| accumulator && verdict, true, false, predicate, cursor)
}

/// True when at least one element satisfies the predicate
///
/// Dual of [`every`]: stops pulling at the first satisfying element.
pub fn some<C, P>(predicate: P, cursor: C) -> bool
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
{
    accumulate_with(|accumulator, verdict| accumulator || verdict, false, true, predicate, cursor)
}

/// Number of elements the cursor yields before exhausting
pub fn count<C: Cursor>(cursor: C) -> usize {
    reduce(|total, _| total + 1, 0, cursor)
}

/// Final element of the traversal, or `None` for an empty one
pub fn last<C: Cursor>(cursor: C) -> Option<C::Item> {
    reduce(|_, value| Some(value), None, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SliceCursor, Source};
    use std::cell::Cell;

    struct CountingCursor<'a> {
        inner: SliceCursor<'a, i32>,
        pulls: &'a Cell<usize>,
    }

    impl<'a> CountingCursor<'a> {
        fn new(data: &'a [i32], pulls: &'a Cell<usize>) -> Self {
            CountingCursor {
                inner: SliceCursor::new(data),
                pulls,
            }
        }
    }

    impl Cursor for CountingCursor<'_> {
        type Item = i32;

        fn advance(&mut self) -> Step<i32> {
            self.pulls.set(self.pulls.get() + 1);
            self.inner.advance()
        }
    }

    fn is_odd(n: i32) -> bool {
        n % 2 != 0
    }

    #[test]
    fn test_head_takes_the_first_element() {
        let data = [4, 5, 6];
        assert_eq!(head((&data).cursor()), Some(4));
    }

    #[test]
    fn test_head_of_empty_is_absent() {
        let data: [i32; 0] = [];
        assert_eq!(head((&data).cursor()), None);
    }

    #[test]
    fn test_head_pulls_exactly_once() {
        let data = [1, 2, 3];
        let pulls = Cell::new(0);

        assert_eq!(head(CountingCursor::new(&data, &pulls)), Some(1));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_find_first_match() {
        let data = [1, 2, 3, 4];
        assert_eq!(find(|n: &i32| *n > 2, (&data).cursor()), Some(3));
    }

    #[test]
    fn test_find_without_match() {
        let data = [1, 2, 3, 4];
        assert_eq!(find(|n: &i32| *n > 9, (&data).cursor()), None);
    }

    #[test]
    fn test_find_cost_tracks_the_match_index() {
        let data = [1, 2, 3, 4];
        let pulls = Cell::new(0);

        assert_eq!(find(|n: &i32| *n > 2, CountingCursor::new(&data, &pulls)), Some(3));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_reduce_sums() {
        let data = [1, 2, 3, 4];
        assert_eq!(reduce(|total, n| total + n, 0, (&data).cursor()), 10);
    }

    #[test]
    fn test_reduce_of_empty_returns_seed() {
        let data: [i32; 0] = [];
        assert_eq!(reduce(|total, n| total + n, 41, (&data).cursor()), 41);
    }

    #[test]
    fn test_reduce_folds_left() {
        let data = [1, 2, 3];
        let trace = reduce(
            |acc: String, n| format!("({acc}+{n})"),
            "0".to_string(),
            (&data).cursor(),
        );
        assert_eq!(trace, "(((0+1)+2)+3)");
    }

    #[test]
    fn test_every_all_satisfy() {
        let data = [1, 3, 5];
        assert!(every(is_odd, (&data).cursor()));
    }

    #[test]
    fn test_every_with_counterexample() {
        let data = [1, 2, 5];
        assert!(!every(is_odd, (&data).cursor()));
    }

    #[test]
    fn test_every_stops_at_the_first_counterexample() {
        let data = [1, 2, 5];
        let pulls = Cell::new(0);

        assert!(!every(is_odd, CountingCursor::new(&data, &pulls)));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_every_on_empty_is_vacuously_true() {
        let data: [i32; 0] = [];
        assert!(every(is_odd, (&data).cursor()));
    }

    #[test]
    fn test_some_without_witness() {
        let data = [2, 4, 6];
        assert!(!some(is_odd, (&data).cursor()));
    }

    #[test]
    fn test_some_stops_at_the_first_witness() {
        let data = [2, 3, 4];
        let pulls = Cell::new(0);

        assert!(some(is_odd, CountingCursor::new(&data, &pulls)));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_some_on_empty_is_false() {
        let data: [i32; 0] = [];
        assert!(!some(is_odd, (&data).cursor()));
    }

    #[test]
    fn test_accumulate_with_counts_nothing_past_the_stop() {
        // XOR-fold from false, stopping on the first even element
        let data = [1, 4, 6, 8];
        let pulls = Cell::new(0);

        let folded = accumulate_with(
            |accumulator: bool, verdict| accumulator ^ verdict,
            false,
            true,
            |n| n % 2 == 0,
            CountingCursor::new(&data, &pulls),
        );
        assert!(folded);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_count_drains_the_cursor() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(count((&data).cursor()), 5);

        let empty: [i32; 0] = [];
        assert_eq!(count((&empty).cursor()), 0);
    }

    #[test]
    fn test_last_element() {
        let data = [1, 2, 3];
        assert_eq!(last((&data).cursor()), Some(3));

        let empty: [i32; 0] = [];
        assert_eq!(last((&empty).cursor()), None);
    }
}
