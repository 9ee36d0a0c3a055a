//! Rule matching: atoms, guarded branches and ordered choice.
//!
//! A grammar is a tree of immutable rule objects built once and reused for
//! any number of matches, from any number of threads. Each match owns its
//! own [`Input`] and [`Dispatcher`].
//!
//! # Control Flow
//!
//! ```text
//! match_rule(choice, input, dispatcher)
//!   Choice    tries each alternative in declaration order
//!   Branch    condition on a snapshot; restore on mismatch, commit on match
//!   body      runs from the committed position
//!   Dispatcher.success(Success { position, tag, captures })
//!        or   Dispatcher.error(Diagnostic)
//! ```
//!
//! Failure inside the engine is a [`RuleOutcome`] value, never a panic. The
//! only failure that leaves a choice without a committed branch is
//! [`DiagnosticKind::ExhaustedChoice`](strand_diagnostic::DiagnosticKind),
//! reported at the choice's entry position with the cursor back there too.
//!
//! # Example
//!
//! ```
//! use strand_input::Cursor;
//! use strand_rule::{Branch, Choice, Collect, Fallback, Literal};
//!
//! let rule = Choice::new()
//!     .or(Branch::new(Literal::str("abc")).with_tag(0))
//!     .or_else(Fallback::new().with_tag(1));
//!
//! let success = strand_rule::match_rule(&rule, &mut Cursor::bytes("abc"), Collect).unwrap();
//! assert_eq!(success.tag, Some(0));
//! assert_eq!(success.position, 3);
//!
//! let success = strand_rule::match_rule(&rule, &mut Cursor::bytes("xyz"), Collect).unwrap();
//! assert_eq!(success.tag, Some(1));
//! assert_eq!(success.position, 0);
//! ```
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG`:
//! - `RUST_LOG=strand_rule=debug` - one line per top-level match
//! - `RUST_LOG=strand_rule=trace` - every branch attempt and rollback
//! - `RUST_LOG=` (empty) - same as [`DEFAULT_LOG_FILTER`]

mod atom;
mod branch;
mod choice;
mod dispatch;
mod outcome;
mod rule;
mod stack;

pub use atom::{Any, Atom, Eof, Literal, TotalAtom};
pub use branch::Branch;
pub use choice::{Choice, Fallback};
pub use dispatch::{Collect, Dispatcher, Handlers};
pub use outcome::RuleOutcome;
pub use rule::{Captures, Rule, Success};

pub use strand_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode};
pub use strand_input::{Cursor, Input, Snapshot, Span, Symbol};

use std::sync::Once;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set. An
/// empty or unparsable `RUST_LOG` falls back to [`DEFAULT_LOG_FILTER`].
/// If the host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var_os("RUST_LOG") else {
            return;
        };
        let filter = directives
            .to_str()
            .and_then(|d| EnvFilter::try_new(d).ok())
            .filter(|_| !directives.is_empty())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).without_time())
            .with(filter)
            .try_init();
    });
}

/// Filter used when `RUST_LOG` is set but gives no usable directives.
pub const DEFAULT_LOG_FILTER: &str = "strand_rule=trace";

/// Run `rule` against `input` and hand the result to `dispatcher`.
///
/// Exactly one of `dispatcher.success` / `dispatcher.error` is called, and
/// its return value is returned unchanged.
pub fn match_rule<I, T, R, D>(rule: &R, input: &mut I, dispatcher: D) -> D::Output
where
    I: Input,
    R: Rule<I::Symbol, T> + ?Sized,
    D: Dispatcher<T>,
{
    let entry = input.position();
    debug!(pos = entry, "match_rule");
    let outcome = rule.attempt(input);
    debug!(
        entry,
        pos = input.position(),
        ok = outcome.is_ok(),
        progress = outcome.made_progress(),
        "match_rule done"
    );
    outcome.dispatch(dispatcher)
}
