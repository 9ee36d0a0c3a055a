//! Atoms: rules with no internal alternation.
//!
//! Atoms come in two capability shapes:
//!
//! - [`Atom`]: may fail, and can describe its failure as a [`Diagnostic`].
//! - [`TotalAtom`]: cannot fail, and so has no failure operation at all.
//!
//! Keeping the shapes separate means the error path of an infallible atom
//! does not exist to be called, rather than existing and asserting.

use std::sync::Arc;

use strand_diagnostic::Diagnostic;
use strand_input::{Input, Symbol};

/// A fallible atom.
pub trait Atom<S: Symbol>: Send + Sync {
    /// Try to match at the current position, consuming what matched.
    ///
    /// On `false` the cursor may be left partway through; the caller took a
    /// snapshot and restores it.
    fn matches(&self, input: &mut dyn Input<Symbol = S>) -> bool;

    /// Describe a failed match that started at `position`.
    fn error(&self, position: usize) -> Diagnostic;
}

/// An atom that always matches.
pub trait TotalAtom<S: Symbol>: Send + Sync {
    fn consume(&self, input: &mut dyn Input<Symbol = S>);
}

/// Matches anything and consumes all remaining input.
///
/// Typical use is a terminal catch-all ("rest of the file").
#[derive(Copy, Clone, Debug, Default)]
pub struct Any;

impl<S: Symbol> TotalAtom<S> for Any {
    fn consume(&self, input: &mut dyn Input<Symbol = S>) {
        while !input.is_eof() {
            input.advance();
        }
    }
}

/// Matches an exact sequence of symbols.
#[derive(Clone, Debug)]
pub struct Literal<S> {
    symbols: Box<[S]>,
    /// How the literal is shown in diagnostics.
    description: Arc<str>,
}

impl<S: Symbol> Literal<S> {
    pub fn new(symbols: impl Into<Box<[S]>>, description: impl Into<Arc<str>>) -> Self {
        Literal {
            symbols: symbols.into(),
            description: description.into(),
        }
    }

    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Literal<u8> {
    /// Byte literal for text input.
    pub fn str(text: &str) -> Self {
        Literal::new(text.as_bytes(), text)
    }
}

impl<S: Symbol> Atom<S> for Literal<S> {
    fn matches(&self, input: &mut dyn Input<Symbol = S>) -> bool {
        for &expected in &*self.symbols {
            if input.peek() != Some(expected) {
                return false;
            }
            input.advance();
        }
        true
    }

    fn error(&self, position: usize) -> Diagnostic {
        Diagnostic::expected_literal(position, Arc::clone(&self.description))
    }
}

/// Matches only at end of input. Consumes nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct Eof;

impl<S: Symbol> Atom<S> for Eof {
    fn matches(&self, input: &mut dyn Input<Symbol = S>) -> bool {
        input.is_eof()
    }

    fn error(&self, position: usize) -> Diagnostic {
        Diagnostic::expected_eof(position)
    }
}
