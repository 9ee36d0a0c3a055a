//! Error codes for rule-matching diagnostics.
//!
//! Format: E#### where the first digit is the phase. Rule matching owns
//! the E1xxx range.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// No alternative of a choice matched and there was no fallback
    E1001,
    /// Literal did not match
    E1002,
    /// Input remained where end of input was required
    E1003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::E1001, ErrorCode::E1002, ErrorCode::E1003];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }

    /// One-line summary used in `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "exhausted choice",
            ErrorCode::E1002 => "expected literal",
            ErrorCode::E1003 => "expected end of input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
