//! Diagnostic creation, severity management, and text/JSON rendering.
//!
//! Bench runs report every finding as a structured [`Diagnostic`] with a
//! severity and a code. The thread-safe [`DiagnosticSink`] accumulates them,
//! and [`DiagnosticRenderer`] implementations format them for a terminal or
//! as JSON lines.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
