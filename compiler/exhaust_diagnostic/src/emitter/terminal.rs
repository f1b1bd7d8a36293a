//! Terminal Emitter
//!
//! Human-readable output:
//!
//! ```text
//! warning[W3001]: Inexhaustive pattern match for Shape, missing cases:
//! - Triangle
//!   --> 120..188: missing 1 case
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// Plain-text emitter over any writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        // Header: severity[CODE]: message
        writeln!(
            self.writer,
            "{}[{}]: {}",
            diagnostic.severity, diagnostic.code, diagnostic.message
        )?;

        for label in &diagnostic.labels {
            writeln!(self.writer, "  --> {:?}: {}", label.span, label.message)?;
        }

        writeln!(self.writer)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use exhaust_ir::Span;
    use pretty_assertions::assert_eq;

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic::warning(ErrorCode::W3001)
            .with_message("Inexhaustive pattern match for Shape, missing cases:\n- Triangle")
            .with_label(Span::new(120, 188), "missing 1 case")
    }

    #[test]
    fn test_plain_output() {
        let mut output = Vec::new();
        TerminalEmitter::new(&mut output)
            .emit(&sample_diagnostic())
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "warning[W3001]: Inexhaustive pattern match for Shape, missing cases:\n\
             - Triangle\n  \
             --> 120..188: missing 1 case\n\n"
        );
    }

    #[test]
    fn test_render_helper() {
        let diags = vec![sample_diagnostic(), sample_diagnostic()];
        let text = crate::emitter::render(&diags);
        assert_eq!(text.matches("warning[W3001]").count(), 2);
        assert!(crate::emitter::render(&[]).is_empty());
    }
}
