//! Diagnostics for rule matching.
//!
//! A match reports at most one [`Diagnostic`]. Local failures inside a
//! choice are recovered by trying the next alternative and never surface;
//! only the final failure reaches the caller's dispatcher.
//!
//! Every diagnostic carries an [`ErrorCode`] so tools can search for it and
//! tests can assert on it without matching message text.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error_code::ErrorCode;
