//! # SeqComb - Lazy Sequence Combinators
//!
//! A pull-based sequence combinator library: a uniform cursor abstraction
//! over arbitrary data sources, composable transformation stages, and
//! terminal reducers with short-circuit guarantees.
//!
//! The library emphasizes:
//!
//! - **Laziness**: composing stages builds descriptions, never results; no
//!   element is computed before a consumer demands it with one `advance()`
//! - **Single-pass consumption**: every traversal gets its own fresh cursor
//!   graph and drives it exactly once
//! - **Short-circuiting**: terminals like `find`, `every`, and `some` stop
//!   pulling the moment the answer is determined
//! - **Source neutrality**: anything that can mint a cursor participates;
//!   the underlying data is never mutated or copied

pub mod chain;
pub mod concat;
pub mod cursor;
pub mod filter;
pub mod map;
pub mod reverse;
pub mod skip;
pub mod source;
pub mod step;
pub mod take;
pub mod terminal;

pub use chain::Chain;
pub use concat::{Concat, ConcatCursor, concat};
pub use cursor::{Cursor, CursorIter};
pub use filter::{FilterCursor, Filtered, filter};
pub use map::{MapCursor, Mapped, map};
pub use reverse::{ReverseCursor, Reversed, reverse};
pub use skip::{SkipCursor, Skipped, skip};
pub use source::{IndexedSource, SliceCursor, Source};
pub use step::Step;
pub use take::{TakeCursor, Taken, take};
pub use terminal::{accumulate_with, count, every, find, head, last, reduce, some};
