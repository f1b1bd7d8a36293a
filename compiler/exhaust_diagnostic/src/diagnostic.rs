use std::fmt;

use exhaust_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
///
/// The checker only ever warns; it never fails a build by itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main message. May span several lines.
    pub message: String,
    /// Labeled spans showing where the problem is. The first one is primary.
    pub labels: Vec<Label>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: String::new(),
            labels: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Get the primary span (first label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.first().map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            write!(f, "\n  --> {:?}: {}", label.span, label.message)?;
        }

        Ok(())
    }
}
