//! Conformance test helpers for the penc priority encoder.
//!
//! Provides shared functions that take port values or configuration text
//! through the encoder and the bench and return structured results for
//! assertion in integration tests.

#![warn(missing_docs)]

use std::path::Path;

use penc_bench::{Bench, BenchReport, BenchSettings, VcdRecorder};
use penc_config::{load_config_from_str, parse_port, resolve_bench, TestVector};
use penc_diagnostics::{Diagnostic, DiagnosticSink};
use penc_encoder::{encode_ports, OutputWord, PriorityEncoder};

/// Result of driving the bench with a set of vectors.
pub struct BenchRun {
    /// The bench report.
    pub report: BenchReport,
    /// All diagnostics emitted during the run.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl BenchRun {
    /// Returns the diagnostic codes in emission order, e.g. `["N001", "E001"]`.
    pub fn codes(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.code.to_string()).collect()
    }
}

/// Encodes two port bit strings, e.g. `encode_strs("00010000", "0001000x")`.
pub fn encode_strs(ui_in: &str, uio_in: &str) -> Result<OutputWord, Box<dyn std::error::Error>> {
    let ui_in = parse_port(ui_in)?;
    let uio_in = parse_port(uio_in)?;
    Ok(encode_ports(&ui_in, &uio_in)?)
}

/// Drives a fresh encoder with `vectors` using the default bench settings.
pub fn run_vectors(vectors: &[TestVector]) -> Result<BenchRun, Box<dyn std::error::Error>> {
    run_with(vectors, BenchSettings::default(), None)
}

/// Loads configuration text, resolves it, and runs the bench.
///
/// When `vcd` is given, the waveform is written there regardless of the
/// configuration's own `waveform` entry.
pub fn run_config_str(
    toml: &str,
    vcd: Option<&Path>,
) -> Result<BenchRun, Box<dyn std::error::Error>> {
    let config = load_config_from_str(toml)?;
    let resolved = resolve_bench(&config, None)?;
    run_with(&resolved.vectors, BenchSettings::from(&resolved), vcd)
}

fn run_with(
    vectors: &[TestVector],
    settings: BenchSettings,
    vcd: Option<&Path>,
) -> Result<BenchRun, Box<dyn std::error::Error>> {
    let mut bench = Bench::new(PriorityEncoder::new(), settings);
    if let Some(path) = vcd {
        let file = std::fs::File::create(path)?;
        bench.set_recorder(Box::new(VcdRecorder::new(std::io::BufWriter::new(file))));
    }
    let sink = DiagnosticSink::new();
    let report = bench.run(vectors, &sink)?;
    Ok(BenchRun {
        report,
        diagnostics: sink.take_all(),
        error_count: sink.error_count(),
        warning_count: sink.warning_count(),
    })
}
