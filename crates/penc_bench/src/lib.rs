//! Stimulus/response bench for the penc priority encoder.
//!
//! The bench plays the part of an external test driver: it drives the two
//! input ports of a device under test, waits a settle delay, samples the
//! output, and checks it against the vector's expectation. Findings are
//! reported as diagnostics; an optional recorder dumps the run as VCD.
//!
//! # Usage
//!
//! ```
//! use penc_bench::{Bench, BenchSettings};
//! use penc_config::default_vectors;
//! use penc_diagnostics::DiagnosticSink;
//! use penc_encoder::PriorityEncoder;
//!
//! let sink = DiagnosticSink::new();
//! let mut bench = Bench::new(PriorityEncoder::new(), BenchSettings::default());
//! let report = bench.run(&default_vectors(), &sink).unwrap();
//! assert!(report.all_passed());
//! ```
//!
//! # Modules
//!
//! - `error`: Bench error types
//! - `dut`: The device-under-test seam
//! - `driver`: Vector application, sampling, and checking
//! - `waveform`: Waveform recording (VCD format)
//! - `sweep`: Exhaustive parallel check against a bit-by-bit reference

#![warn(missing_docs)]

pub mod driver;
pub mod dut;
pub mod error;
pub mod sweep;
pub mod waveform;

pub use driver::{Bench, BenchReport, BenchSettings, VectorOutcome, Verdict};
pub use dut::Dut;
pub use error::BenchError;
pub use sweep::{reference_encode, sweep, sweep_with, SweepMismatch, SweepReport};
pub use waveform::{VcdRecorder, WaveformRecorder};
