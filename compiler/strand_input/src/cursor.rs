//! Cursor over a borrowed symbol sequence.
//!
//! End of input is reported as `None` from [`Input::peek`]; there is no
//! in-band sentinel symbol, so every value of `S` is a legal symbol.
//!
//! # Backtracking
//!
//! A [`Snapshot`] is just a position. Taking one is free and restoring one
//! discards everything consumed since, which is all a rule needs to retry
//! an alternative from the same place.

use std::fmt;

use crate::Span;

/// A saved cursor position for speculative matching.
///
/// Only the position is captured. Input data is never copied.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Snapshot {
    pos: usize,
}

impl Snapshot {
    /// Create a snapshot at `pos`.
    ///
    /// Custom [`Input`] implementations use this from [`Input::snapshot`].
    #[inline]
    pub fn new(pos: usize) -> Self {
        Snapshot { pos }
    }

    /// The saved position.
    #[inline]
    pub fn position(self) -> usize {
        self.pos
    }
}

/// Bound on symbol types: anything small, comparable and shareable.
///
/// Blanket-implemented, so bytes, chars and plain token-kind enums all
/// qualify without opting in.
pub trait Symbol: Copy + Eq + fmt::Debug + Send + Sync + 'static {}

impl<S: Copy + Eq + fmt::Debug + Send + Sync + 'static> Symbol for S {}

/// Sequential symbol source consumed by rules.
///
/// # Contract
///
/// - `peek` never changes the position.
/// - `advance` is only called when `peek` returned `Some`.
/// - `restore(s)` puts the position back to exactly `s.position()`.
pub trait Input {
    /// One unit of input (a byte, a char, a token kind, ...).
    type Symbol: Symbol;

    /// Current symbol, or `None` at end of input.
    fn peek(&self) -> Option<Self::Symbol>;

    /// Consume the current symbol.
    fn advance(&mut self);

    /// Current position, counted in symbols from the start.
    fn position(&self) -> usize;

    /// Reset to a previously taken snapshot.
    fn restore(&mut self, snapshot: Snapshot);

    #[inline]
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.position())
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.peek().is_none()
    }
}

/// Cursor over a borrowed slice of symbols.
///
/// The cursor is [`Copy`]; copying it is another way to fork a match
/// attempt, but rules go through [`Input::snapshot`] so they also work
/// with inputs that are not.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a, S> {
    symbols: &'a [S],
    pos: usize,
}

impl<'a, S> Cursor<'a, S> {
    /// Create a cursor at the start of `symbols`.
    pub fn new(symbols: &'a [S]) -> Self {
        Cursor { symbols, pos: 0 }
    }

    /// Total number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [S] {
        self.symbols.get(self.pos..).unwrap_or(&[])
    }

    /// Symbols covered by `span`, or `None` if it reaches past the input.
    pub fn slice(&self, span: Span) -> Option<&'a [S]> {
        self.symbols.get(span.start..span.end)
    }
}

impl<'a> Cursor<'a, u8> {
    /// Byte cursor over UTF-8 text.
    pub fn bytes(text: &'a str) -> Self {
        Cursor::new(text.as_bytes())
    }

    /// Text covered by `span`, or `None` if it is out of range or splits
    /// a UTF-8 sequence.
    pub fn text(&self, span: Span) -> Option<&'a str> {
        self.slice(span).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

impl<S: Symbol> Input for Cursor<'_, S> {
    type Symbol = S;

    #[inline]
    fn peek(&self) -> Option<S> {
        self.symbols.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.pos < self.symbols.len(),
            "advance past end of input (pos {})",
            self.pos
        );
        // Saturates at the end in release builds.
        self.pos = (self.pos + 1).min(self.symbols.len());
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn restore(&mut self, snapshot: Snapshot) {
        debug_assert!(
            snapshot.pos <= self.symbols.len(),
            "snapshot position {} out of bounds (max {})",
            snapshot.pos,
            self.symbols.len()
        );
        self.pos = snapshot.pos.min(self.symbols.len());
    }
}
