//! Collects the diagnostics of a bench run.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

const SEVERITIES: usize = 4;

fn slot(severity: Severity) -> usize {
    match severity {
        Severity::Help => 0,
        Severity::Note => 1,
        Severity::Warning => 2,
        Severity::Error => 3,
    }
}

/// A thread-safe accumulator for diagnostics.
///
/// Per-severity counts are kept in atomics next to the diagnostic list, so a
/// run's verdict can be read without locking or cloning. Counts are totals
/// over the sink's lifetime and survive [`take_all`](Self::take_all).
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    counts: [AtomicUsize; SEVERITIES],
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            counts: Default::default(),
        }
    }

    /// Emits a diagnostic into the sink.
    pub fn emit(&self, diag: Diagnostic) {
        self.counts[slot(diag.severity)].fetch_add(1, Ordering::Relaxed);
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diag);
    }

    /// Number of diagnostics of `severity` emitted so far.
    pub fn count(&self, severity: Severity) -> usize {
        self.counts[slot(severity)].load(Ordering::Relaxed)
    }

    /// Number of failed checks.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warnings, such as unresolvable outputs that were expected.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns `true` if any check failed.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Takes all accumulated diagnostics in emission order, leaving the sink
    /// empty. Counts are not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *diagnostics)
    }

    /// Snapshot of the accumulated diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
