//! Four-way rule outcome: progress crossed with success.
//!
//! | Progress | Result | Variant | Meaning |
//! |----------|--------|---------|---------|
//! | Consumed | Ok | `ConsumedOk` | Committed to this rule, matched |
//! | Empty | Ok | `EmptyOk` | Matched without consuming (fallback, empty literal) |
//! | Consumed | Err | `ConsumedErr` | Committed, then failed. No further alternatives |
//! | Empty | Err | `EmptyErr` | Did not match. Try the next alternative |
//!
//! Progress describes the attempt, not the final cursor: every error
//! variant is returned with the cursor restored to the rule's entry
//! position, so no partial consumption ever leaks to the caller.
//!
//! A choice stops at the first variant that is not `EmptyErr`.

use strand_diagnostic::Diagnostic;

#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum RuleOutcome<T> {
    /// Consumed input and matched.
    ConsumedOk { value: T },
    /// Matched without consuming input.
    EmptyOk { value: T },
    /// A committed rule failed. Carries the failing component's diagnostic.
    ConsumedErr { diagnostic: Diagnostic },
    /// The rule did not match. The cursor is untouched.
    EmptyErr { diagnostic: Diagnostic },
}

impl<T> RuleOutcome<T> {
    // === Constructors ===

    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    /// Successful outcome whose variant follows whether input was consumed.
    #[inline]
    pub fn ok_with_progress(value: T, made_progress: bool) -> Self {
        if made_progress {
            Self::ConsumedOk { value }
        } else {
            Self::EmptyOk { value }
        }
    }

    #[inline]
    pub fn consumed_err(diagnostic: Diagnostic) -> Self {
        Self::ConsumedErr { diagnostic }
    }

    #[inline]
    pub fn empty_err(diagnostic: Diagnostic) -> Self {
        Self::EmptyErr { diagnostic }
    }

    // === Predicates ===

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `true` if the rule consumed input or committed before failing.
    #[inline]
    pub fn made_progress(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::ConsumedErr { .. })
    }

    /// `true` for the one variant a choice recovers from.
    #[inline]
    pub fn failed_without_progress(&self) -> bool {
        matches!(self, Self::EmptyErr { .. })
    }

    #[inline]
    pub fn failed_with_progress(&self) -> bool {
        matches!(self, Self::ConsumedErr { .. })
    }

    // === Transformations ===

    /// Map the success value, preserving the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RuleOutcome<U> {
        match self {
            Self::ConsumedOk { value } => RuleOutcome::ConsumedOk { value: f(value) },
            Self::EmptyOk { value } => RuleOutcome::EmptyOk { value: f(value) },
            Self::ConsumedErr { diagnostic } => RuleOutcome::ConsumedErr { diagnostic },
            Self::EmptyErr { diagnostic } => RuleOutcome::EmptyErr { diagnostic },
        }
    }

    /// Mark the outcome as coming from an already-committed context.
    ///
    /// A soft failure after commitment can no longer fall through to
    /// another alternative, so `EmptyErr` becomes `ConsumedErr`. Successes
    /// are unchanged.
    pub fn committed(self) -> Self {
        match self {
            Self::EmptyErr { diagnostic } => Self::ConsumedErr { diagnostic },
            other => other,
        }
    }

    /// The diagnostic of either error variant.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::ConsumedErr { diagnostic } | Self::EmptyErr { diagnostic } => Some(diagnostic),
            Self::ConsumedOk { .. } | Self::EmptyOk { .. } => None,
        }
    }

    /// Drop progress information.
    pub fn into_result(self) -> Result<T, Diagnostic> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => Ok(value),
            Self::ConsumedErr { diagnostic } | Self::EmptyErr { diagnostic } => Err(diagnostic),
        }
    }
}

impl<T> From<RuleOutcome<T>> for Result<T, Diagnostic> {
    fn from(outcome: RuleOutcome<T>) -> Self {
        outcome.into_result()
    }
}
