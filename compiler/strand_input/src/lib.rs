//! Input abstraction for the strand rule engine.
//!
//! Rules never see the underlying data directly. They go through [`Input`],
//! which offers a non-consuming `peek`, a consuming `advance`, and cheap
//! [`Snapshot`]s for backtracking. [`Cursor`] is the stock implementation
//! over a borrowed slice; any other sequential symbol source can implement
//! [`Input`] itself.

mod cursor;
mod span;

pub use cursor::{Cursor, Input, Snapshot, Symbol};
pub use span::Span;
