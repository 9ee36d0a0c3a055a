//! Ordered choice.
//!
//! ```text
//! Start -> Trying(0) -> Trying(1) -> ... -> Trying(n-1)
//!             |            |                    |
//!             +-- match ---+------ match -------+--> Done(tag)
//!                                               |
//!                                    no match --+--> Fallback -> Done(fallback tag)
//!                                                \-> Exhausted(entry)
//! ```
//!
//! First match wins: a later alternative is never attempted once an earlier
//! one matches, even if the later one would consume more.
//!
//! An alternative that fails without committing (`EmptyErr`) hands over to
//! the next one at the untouched entry position. An alternative that fails
//! after committing (`ConsumedErr`) ends the choice immediately with that
//! error; neither later alternatives nor the fallback run.
//!
//! Whenever the choice fails, the cursor is at the entry position.

use strand_diagnostic::Diagnostic;
use strand_input::{Input, Symbol};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{Branch, Captures, Rule, RuleOutcome, Success};

/// The unconditional last alternative of a choice.
///
/// Consumes nothing and always matches, but only after every explicit
/// alternative has declined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback<T> {
    tag: Option<T>,
}

impl<T> Fallback<T> {
    pub fn new() -> Self {
        Fallback { tag: None }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: T) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn tag(&self) -> Option<&T> {
        self.tag.as_ref()
    }
}

impl<T> Default for Fallback<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered alternation over branches and rules.
///
/// ```
/// use strand_input::Cursor;
/// use strand_rule::{Branch, Choice, Collect, Literal};
///
/// let keyword = Choice::new()
///     .or(Branch::new(Literal::str("abc")).with_tag(0))
///     .or(Branch::new(Literal::str("def")).with_tag(1));
///
/// let err = strand_rule::match_rule(&keyword, &mut Cursor::bytes(""), Collect).unwrap_err();
/// assert!(err.is_exhausted_choice());
/// assert_eq!(err.position, 0);
/// ```
pub struct Choice<S: Symbol, T> {
    alternatives: Vec<Box<dyn Rule<S, T>>>,
    fallback: Option<Fallback<T>>,
}

impl<S: Symbol, T: Clone + Send + Sync + 'static> Choice<S, T> {
    /// A choice with no alternatives. Until some are added it always
    /// exhausts (or takes its fallback).
    pub fn new() -> Self {
        Choice {
            alternatives: Vec::new(),
            fallback: None,
        }
    }

    /// Append a branch. Alternatives are tried in the order they are added.
    #[must_use]
    pub fn or(self, branch: Branch<S, T>) -> Self {
        self.or_rule(branch)
    }

    /// Append any rule, e.g. another choice.
    #[must_use]
    pub fn or_rule(mut self, rule: impl Rule<S, T> + 'static) -> Self {
        self.alternatives.push(Box::new(rule));
        self
    }

    /// Set the fallback taken when every alternative declines. It is tried
    /// last no matter when it is set.
    #[must_use]
    pub fn or_else(mut self, fallback: Fallback<T>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl<S: Symbol, T> Choice<S, T> {
    /// Number of explicit alternatives (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl<S: Symbol, T: Clone + Send + Sync + 'static> Default for Choice<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, T: Clone + Send + Sync> Choice<S, T> {
    fn attempt_alternatives(&self, input: &mut dyn Input<Symbol = S>) -> RuleOutcome<Success<T>> {
        let entry = input.snapshot();

        for (index, alternative) in self.alternatives.iter().enumerate() {
            trace!(index, pos = entry.position(), "choice: trying");
            match alternative.attempt(input) {
                outcome @ (RuleOutcome::ConsumedOk { .. } | RuleOutcome::EmptyOk { .. }) => {
                    trace!(index, pos = input.position(), "choice: done");
                    return outcome;
                }
                RuleOutcome::ConsumedErr { diagnostic } => {
                    trace!(index, code = %diagnostic.code(), "choice: committed alternative failed");
                    input.restore(entry);
                    return RuleOutcome::consumed_err(diagnostic);
                }
                RuleOutcome::EmptyErr { .. } => input.restore(entry),
            }
        }

        if let Some(fallback) = &self.fallback {
            trace!(pos = entry.position(), "choice: fallback");
            return RuleOutcome::empty_ok(Success {
                position: entry.position(),
                tag: fallback.tag.clone(),
                captures: Captures::new(),
            });
        }

        trace!(pos = entry.position(), "choice: exhausted");
        RuleOutcome::empty_err(Diagnostic::exhausted_choice(entry.position()))
    }
}

impl<S: Symbol, T> Drop for Choice<S, T> {
    fn drop(&mut self) {
        // Nested grammars drop as deeply as they match.
        let alternatives = std::mem::take(&mut self.alternatives);
        ensure_sufficient_stack(|| drop(alternatives));
    }
}

impl<S: Symbol, T: Clone + Send + Sync> Rule<S, T> for Choice<S, T> {
    fn attempt(&self, input: &mut dyn Input<Symbol = S>) -> RuleOutcome<Success<T>> {
        ensure_sufficient_stack(|| self.attempt_alternatives(input))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
