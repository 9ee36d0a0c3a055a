//! Guarded alternatives.
//!
//! A branch is `condition >> body`, tagged with a discriminant. The
//! condition runs against a snapshot:
//!
//! - mismatch: restore the snapshot and report `EmptyErr`, so the
//!   enclosing choice moves on with nothing consumed;
//! - match: the branch is committed. The body runs from the advanced
//!   position and a body failure is a `ConsumedErr`. The enclosing choice
//!   does not try later branches after that.

use strand_input::{Input, Span, Symbol};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{Atom, Captures, Rule, RuleOutcome, Success, TotalAtom};

enum Condition<S: Symbol> {
    Atom(Box<dyn Atom<S>>),
    Total(Box<dyn TotalAtom<S>>),
}

enum Body<S: Symbol, T> {
    Atom(Box<dyn Atom<S>>),
    Total(Box<dyn TotalAtom<S>>),
    Rule(Box<dyn Rule<S, T>>),
}

/// A condition-guarded, optionally tagged alternative.
///
/// ```
/// use strand_rule::{Branch, Literal};
///
/// // `"if" >> "(" `, reported as discriminant 3
/// let branch: Branch<u8, u32> = Branch::new(Literal::str("if"))
///     .then(Literal::str("("))
///     .with_tag(3);
/// ```
pub struct Branch<S: Symbol, T> {
    condition: Condition<S>,
    body: Option<Body<S, T>>,
    tag: Option<T>,
}

impl<S: Symbol, T> Branch<S, T> {
    /// Branch guarded by a fallible atom.
    pub fn new(condition: impl Atom<S> + 'static) -> Self {
        Branch {
            condition: Condition::Atom(Box::new(condition)),
            body: None,
            tag: None,
        }
    }

    /// Branch guarded by an atom that always matches.
    ///
    /// Such a branch never falls through, so any alternative after it in a
    /// choice is unreachable.
    pub fn total(condition: impl TotalAtom<S> + 'static) -> Self {
        Branch {
            condition: Condition::Total(Box::new(condition)),
            body: None,
            tag: None,
        }
    }

    /// Run a fallible atom after the condition.
    #[must_use]
    pub fn then(mut self, body: impl Atom<S> + 'static) -> Self {
        self.body = Some(Body::Atom(Box::new(body)));
        self
    }

    #[must_use]
    pub fn then_total(mut self, body: impl TotalAtom<S> + 'static) -> Self {
        self.body = Some(Body::Total(Box::new(body)));
        self
    }

    /// Run a whole rule (typically a nested [`Choice`](crate::Choice)) after
    /// the condition.
    ///
    /// If the branch has no tag of its own, the nested rule's tag is
    /// reported instead. The body span is captured even when the nested
    /// rule matched nothing, followed by the nested rule's own captures.
    #[must_use]
    pub fn then_rule(mut self, body: impl Rule<S, T> + 'static) -> Self {
        self.body = Some(Body::Rule(Box::new(body)));
        self
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

impl<S: Symbol, T: Clone + Send + Sync> Rule<S, T> for Branch<S, T> {
    fn attempt(&self, input: &mut dyn Input<Symbol = S>) -> RuleOutcome<Success<T>> {
        let entry = input.snapshot();
        let start = entry.position();

        match &self.condition {
            Condition::Atom(atom) => {
                if !atom.matches(input) {
                    trace!(pos = start, reached = input.position(), "branch condition failed");
                    input.restore(entry);
                    return RuleOutcome::empty_err(atom.error(start));
                }
            }
            Condition::Total(atom) => atom.consume(input),
        }

        let mut captures = Captures::new();
        captures.push(Span::new(start, input.position()));
        let mut tag = self.tag.clone();

        if let Some(body) = &self.body {
            let body_start = input.position();
            match body {
                Body::Atom(atom) => {
                    if !atom.matches(input) {
                        trace!(pos = body_start, "branch body failed after commit");
                        input.restore(entry);
                        return RuleOutcome::consumed_err(atom.error(body_start));
                    }
                    captures.push(Span::new(body_start, input.position()));
                }
                Body::Total(atom) => {
                    atom.consume(input);
                    captures.push(Span::new(body_start, input.position()));
                }
                Body::Rule(rule) => {
                    let outcome = ensure_sufficient_stack(|| rule.attempt(input)).committed();
                    match outcome {
                        RuleOutcome::ConsumedOk { value } | RuleOutcome::EmptyOk { value } => {
                            captures.push(Span::new(body_start, input.position()));
                            captures.extend(value.captures);
                            tag = tag.or(value.tag);
                        }
                        RuleOutcome::ConsumedErr { diagnostic }
                        | RuleOutcome::EmptyErr { diagnostic } => {
                            trace!(pos = body_start, "branch body rule failed after commit");
                            input.restore(entry);
                            return RuleOutcome::consumed_err(diagnostic);
                        }
                    }
                }
            }
        }

        let position = input.position();
        trace!(start, position, "branch matched");
        RuleOutcome::ok_with_progress(
            Success {
                position,
                tag,
                captures,
            },
            position != start,
        )
    }
}

impl<S: Symbol, T> Drop for Branch<S, T> {
    fn drop(&mut self) {
        if let Some(body) = self.body.take() {
            ensure_sufficient_stack(|| drop(body));
        }
    }
}
