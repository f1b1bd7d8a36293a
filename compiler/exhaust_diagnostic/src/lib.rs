//! Diagnostics produced by the exhaust checker.
//!
//! - [`Diagnostic`]: code, severity, message and labeled span
//! - [`ErrorCode`]: searchable codes
//! - [`DiagnosticQueue`]: collects diagnostics from parallel workers and
//!   hands them back in source order
//! - [`emitter`]: plain-text rendering

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
