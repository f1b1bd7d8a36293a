//! Diagnostic queue for collecting and ordering diagnostics.
//!
//! Switches are checked on several threads, so diagnostics arrive in
//! scheduling order. The queue restores source order on [`flush`], which
//! makes output identical from run to run.
//!
//! Every queued diagnostic is kept. Two constructs may share a span and a
//! message (synthesized code at [`Span::DUMMY`]), and each still gets its own
//! diagnostic.
//!
//! [`flush`]: DiagnosticQueue::flush

use exhaust_ir::Span;

use crate::Diagnostic;

/// Queue for collecting diagnostics and returning them in source order.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.extend(per_switch_results);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// Add every diagnostic of an iterator.
    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.push(diag);
        }
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. Diagnostics without a label sort last.
    /// Ties keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by_key(sort_key);
        diagnostics
    }
}

fn sort_key(diag: &Diagnostic) -> (bool, Span) {
    match diag.primary_span() {
        Some(span) => (false, span),
        None => (true, Span::DUMMY),
    }
}

#[cfg(test)]
mod tests;
