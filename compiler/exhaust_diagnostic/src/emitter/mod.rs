//! Diagnostic emitters.
//!
//! Only human-readable, uncolored text is supported.

mod terminal;

pub use terminal::TerminalEmitter;

use std::io;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Emit multiple diagnostics in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(diag)?;
        }
        Ok(())
    }
}

/// Render diagnostics to a string.
pub fn render(diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output);
    // Writes into a Vec cannot fail.
    let _ = emitter.emit_all(diagnostics);
    String::from_utf8_lossy(&output).into_owned()
}
