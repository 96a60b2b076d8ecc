//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[E001]: uo_out mismatch
///   --> vector 8 "first one at bit 12"
///    = note: expected 00001100, observed 00000100
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        let header = format!("{}[{}]", diag.severity, diag.code);
        if self.color {
            out.push_str(&format!(
                "{}{header}\x1b[0m\x1b[1m: {}\x1b[0m\n",
                diag.severity.ansi_color(),
                diag.message
            ));
        } else {
            out.push_str(&format!("{header}: {}\n", diag.message));
        }

        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> {subject}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Renders each diagnostic as one line of JSON.
#[derive(Default)]
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        // Only strings and plain enums inside, so serialization cannot fail.
        serde_json::to_string(diag).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;

    fn mismatch() -> Diagnostic {
        Diagnostic::error(DiagnosticCode::MISMATCH, "uo_out mismatch")
            .with_subject("vector 8 \"first one at bit 12\"")
            .with_note("expected 00001100, observed 00000100")
            .with_help("ui_in drives the high byte")
    }

    #[test]
    fn render_plain() {
        let output = TerminalRenderer::new(false).render(&mismatch());
        assert!(output.starts_with("error[E001]: uo_out mismatch\n"));
        assert!(output.contains("  --> vector 8 \"first one at bit 12\"\n"));
        assert!(output.contains("   = note: expected 00001100, observed 00000100\n"));
        assert!(output.contains("   = help: ui_in drives the high byte\n"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn render_colored() {
        let output = TerminalRenderer::new(true).render(&mismatch());
        assert!(output.starts_with("\x1b[1;31merror[E001]"));
        assert!(output.contains("uo_out mismatch"));
    }

    #[test]
    fn render_without_subject() {
        let diag = Diagnostic::warning(DiagnosticCode::UNRESOLVABLE_OUTPUT, "unresolvable");
        let output = TerminalRenderer::new(false).render(&diag);
        assert_eq!(output, "warning[W001]: unresolvable\n");
    }

    #[test]
    fn render_json_line() {
        let output = JsonRenderer.render(&mismatch());
        assert!(!output.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["message"], "uo_out mismatch");
        assert_eq!(value["code"]["number"], 1);
    }
}
