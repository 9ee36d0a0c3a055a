//! The diagnostic value handed to a dispatcher's error handler.

use std::fmt;
use std::sync::Arc;

use crate::ErrorCode;

/// What went wrong.
///
/// `ExhaustedChoice` is the only failure the choice combinator raises
/// itself. The other kinds come from the fallible atoms a grammar is built
/// from and reach the caller when a committed branch fails.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// No branch matched and the choice had no fallback.
    ExhaustedChoice,
    /// A literal did not match. `expected` is the literal as written.
    ExpectedLiteral { expected: Arc<str> },
    /// Input remained where end of input was required.
    ExpectedEof,
}

impl DiagnosticKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosticKind::ExhaustedChoice => ErrorCode::E1001,
            DiagnosticKind::ExpectedLiteral { .. } => ErrorCode::E1002,
            DiagnosticKind::ExpectedEof => ErrorCode::E1003,
        }
    }
}

/// A single failure report: kind plus input position.
///
/// For `ExhaustedChoice` the position is always the choice's entry
/// position, never one reached while trying a branch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: usize) -> Self {
        Diagnostic { kind, position }
    }

    pub fn exhausted_choice(position: usize) -> Self {
        Diagnostic::new(DiagnosticKind::ExhaustedChoice, position)
    }

    pub fn expected_literal(position: usize, expected: impl Into<Arc<str>>) -> Self {
        Diagnostic::new(
            DiagnosticKind::ExpectedLiteral {
                expected: expected.into(),
            },
            position,
        )
    }

    pub fn expected_eof(position: usize) -> Self {
        Diagnostic::new(DiagnosticKind::ExpectedEof, position)
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[inline]
    pub fn is_exhausted_choice(&self) -> bool {
        matches!(self.kind, DiagnosticKind::ExhaustedChoice)
    }

    /// Human-readable message without the code prefix.
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::ExhaustedChoice => {
                format!("no alternative matched at {}", self.position)
            }
            DiagnosticKind::ExpectedLiteral { expected } => {
                format!("expected `{expected}` at {}", self.position)
            }
            DiagnosticKind::ExpectedEof => {
                format!("expected end of input at {}", self.position)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code(), self.message())
    }
}

impl std::error::Error for Diagnostic {}
