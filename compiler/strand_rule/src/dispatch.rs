//! Result dispatch.
//!
//! The caller supplies a [`Dispatcher`]; the engine calls exactly one of its
//! handlers per top-level match and returns whatever that handler returns.
//! Handlers take `self` by value, so a second call cannot happen.
//!
//! Which alternative matched is carried by [`Success::tag`]. A dispatcher
//! selects its handling with an ordinary `match` on the tag:
//!
//! ```
//! use strand_input::Cursor;
//! use strand_rule::{Branch, Choice, Diagnostic, Dispatcher, Literal, Success};
//!
//! #[derive(Clone, Copy)]
//! enum Keyword { Abc, Def }
//!
//! struct Code;
//!
//! impl Dispatcher<Keyword> for Code {
//!     type Output = i32;
//!
//!     fn success(self, success: Success<Keyword>) -> i32 {
//!         match success.tag {
//!             Some(Keyword::Abc) => 0,
//!             Some(Keyword::Def) => 1,
//!             None => 2,
//!         }
//!     }
//!
//!     fn error(self, _: Diagnostic) -> i32 {
//!         -1
//!     }
//! }
//!
//! let rule = Choice::new()
//!     .or(Branch::new(Literal::str("abc")).with_tag(Keyword::Abc))
//!     .or(Branch::new(Literal::str("def")).with_tag(Keyword::Def));
//!
//! assert_eq!(strand_rule::match_rule(&rule, &mut Cursor::bytes("def"), Code), 1);
//! assert_eq!(strand_rule::match_rule(&rule, &mut Cursor::bytes(""), Code), -1);
//! ```

use std::marker::PhantomData;

use strand_diagnostic::Diagnostic;

use crate::{RuleOutcome, Success};

/// Caller-supplied sink for the result of a match.
pub trait Dispatcher<T> {
    /// The overall result of the match. Opaque to the engine.
    type Output;

    fn success(self, success: Success<T>) -> Self::Output;

    fn error(self, diagnostic: Diagnostic) -> Self::Output;
}

/// Dispatcher that returns the result as a plain `Result`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Collect;

impl<T> Dispatcher<T> for Collect {
    type Output = Result<Success<T>, Diagnostic>;

    fn success(self, success: Success<T>) -> Self::Output {
        Ok(success)
    }

    fn error(self, diagnostic: Diagnostic) -> Self::Output {
        Err(diagnostic)
    }
}

/// Dispatcher built from a pair of closures with a common return type.
pub struct Handlers<F, G, O> {
    on_success: F,
    on_error: G,
    output: PhantomData<fn() -> O>,
}

impl<F, G, O> Handlers<F, G, O> {
    pub fn new(on_success: F, on_error: G) -> Self {
        Handlers {
            on_success,
            on_error,
            output: PhantomData,
        }
    }
}

impl<T, F, G, O> Dispatcher<T> for Handlers<F, G, O>
where
    F: FnOnce(Success<T>) -> O,
    G: FnOnce(Diagnostic) -> O,
{
    type Output = O;

    fn success(self, success: Success<T>) -> O {
        (self.on_success)(success)
    }

    fn error(self, diagnostic: Diagnostic) -> O {
        (self.on_error)(diagnostic)
    }
}

impl<T> RuleOutcome<Success<T>> {
    /// Hand the outcome to `dispatcher`, calling exactly one handler.
    pub fn dispatch<D: Dispatcher<T>>(self, dispatcher: D) -> D::Output {
        match self {
            RuleOutcome::ConsumedOk { value } | RuleOutcome::EmptyOk { value } => {
                dispatcher.success(value)
            }
            RuleOutcome::ConsumedErr { diagnostic } | RuleOutcome::EmptyErr { diagnostic } => {
                dispatcher.error(diagnostic)
            }
        }
    }
}
