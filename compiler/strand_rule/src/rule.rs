//! The uniform rule capability and its success payload.

use smallvec::SmallVec;
use strand_input::{Input, Span, Symbol};

use crate::{Dispatcher, RuleOutcome};

/// Spans consumed by a committed branch: its condition, then its body.
///
/// A branch with a body always yields both spans, zero-width or not, so
/// index 0 is the condition and index 1 the body. A nested rule body
/// appends its own captures after those two.
pub type Captures = SmallVec<[Span; 4]>;

/// Payload of a successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Success<T> {
    /// Cursor position after the match.
    pub position: usize,
    /// Discriminant of the alternative that matched. `None` for untagged
    /// alternatives.
    pub tag: Option<T>,
    pub captures: Captures,
}

impl<T> Success<T> {
    /// Untagged success at `position` with nothing captured.
    pub fn at(position: usize) -> Self {
        Success {
            position,
            tag: None,
            captures: Captures::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: T) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// Anything a choice can try: branches, choices, user-defined rules.
///
/// Rules are immutable once built. `attempt` must leave the cursor at its
/// entry position whenever it returns an error variant.
///
/// The input is taken as a trait object so that one grammar value works
/// for every input type and lifetime with the same symbol type.
pub trait Rule<S: Symbol, T>: Send + Sync {
    fn attempt(&self, input: &mut dyn Input<Symbol = S>) -> RuleOutcome<Success<T>>;

    /// Match and dispatch in one call. See [`match_rule`](crate::match_rule).
    fn try_match<I, D>(&self, input: &mut I, dispatcher: D) -> D::Output
    where
        Self: Sized,
        I: Input<Symbol = S>,
        D: Dispatcher<T>,
    {
        crate::match_rule(self, input, dispatcher)
    }
}

impl<S: Symbol, T, R: Rule<S, T> + ?Sized> Rule<S, T> for Box<R> {
    fn attempt(&self, input: &mut dyn Input<Symbol = S>) -> RuleOutcome<Success<T>> {
        (**self).attempt(input)
    }
}
