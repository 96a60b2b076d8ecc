//! Vector application, output sampling, and checking.
//!
//! For each vector the bench drives `ui_in` and `uio_in` at the current
//! time, advances by the settle delay, samples `uo_out`, and compares it
//! with the expectation. The resolvability check comes first: an output
//! carrying `X` or `Z` bits is never read as an integer.

use penc_common::{LogicWord, SimTime};
use penc_config::{Expect, ResolvedBench, TestVector};
use penc_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use penc_encoder::{Encoding, OutputWord};
use serde::Serialize;

use crate::dut::Dut;
use crate::error::BenchError;
use crate::waveform::WaveformRecorder;

const UI_IN: &str = "ui_in";
const UIO_IN: &str = "uio_in";
const UO_OUT: &str = "uo_out";

/// Ports dumped to the waveform, in recording order.
const RECORDED: [&str; 3] = [UI_IN, UIO_IN, UO_OUT];

/// Bench-wide settings.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchSettings {
    /// Bench name, used as the waveform scope.
    pub name: String,
    /// Delay between driving a vector and sampling the output.
    pub settle: SimTime,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            name: "priority_encoder".to_string(),
            settle: SimTime::from_ns(10),
        }
    }
}

impl From<&ResolvedBench> for BenchSettings {
    fn from(resolved: &ResolvedBench) -> Self {
        Self {
            name: resolved.name.clone(),
            settle: resolved.settle,
        }
    }
}

/// The result of checking one sampled output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The output matched the expectation.
    Pass,
    /// The output resolved to a different value.
    Mismatch {
        /// Expected value.
        expected: u8,
        /// Observed value.
        observed: u8,
    },
    /// A value was expected but the output carried undefined bits.
    UnexpectedUnresolved {
        /// Expected value.
        expected: u8,
    },
    /// An unresolved output was expected but the output resolved.
    ExpectedUnresolved {
        /// Observed value.
        observed: u8,
    },
}

impl Verdict {
    /// Compares an expectation with a sampled output.
    pub fn check(expect: Expect, observed: &OutputWord) -> Self {
        match (expect, observed.to_u8()) {
            (Expect::Value(e), Some(o)) if e == o => Verdict::Pass,
            (Expect::Value(e), Some(o)) => Verdict::Mismatch {
                expected: e,
                observed: o,
            },
            (Expect::Value(e), None) => Verdict::UnexpectedUnresolved { expected: e },
            (Expect::Unresolved, None) => Verdict::Pass,
            (Expect::Unresolved, Some(o)) => Verdict::ExpectedUnresolved { observed: o },
        }
    }

    /// Returns `true` for [`Verdict::Pass`].
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// What happened when one vector was applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorOutcome {
    /// One-based position in the run.
    pub index: usize,
    /// Vector label.
    pub name: String,
    /// Value driven onto `ui_in`.
    pub ui_in: String,
    /// Value driven onto `uio_in`.
    pub uio_in: String,
    /// Expected output.
    pub expect: Expect,
    /// Sampled `uo_out` as a bit string.
    pub observed: String,
    /// Sampled `uo_out` as an integer, if resolved.
    pub observed_value: Option<u8>,
    /// Decoded reading of the sampled output.
    pub encoding: Encoding,
    /// When the inputs were driven.
    pub applied_at: SimTime,
    /// When the output was sampled.
    pub sampled_at: SimTime,
    /// Check result.
    pub verdict: Verdict,
}

/// Summary of a bench run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchReport {
    /// Bench name.
    pub name: String,
    /// One entry per applied vector, in order.
    pub outcomes: Vec<VectorOutcome>,
    /// Simulation time after the last sample.
    pub final_time: SimTime,
}

impl BenchReport {
    /// Number of passing vectors.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.verdict.passed()).count()
    }

    /// Number of failing vectors.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Returns `true` when every vector passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Drives a [`Dut`] with test vectors.
pub struct Bench<D: Dut> {
    dut: D,
    settings: BenchSettings,
    time: SimTime,
    recorder: Option<Box<dyn WaveformRecorder>>,
    last_recorded: [Option<LogicWord>; RECORDED.len()],
}

impl<D: Dut> Bench<D> {
    /// Creates a bench at time zero.
    pub fn new(dut: D, settings: BenchSettings) -> Self {
        Self {
            dut,
            settings,
            time: SimTime::zero(),
            recorder: None,
            last_recorded: [None; RECORDED.len()],
        }
    }

    /// Attaches a waveform recorder.
    pub fn set_recorder(&mut self, recorder: Box<dyn WaveformRecorder>) {
        self.recorder = Some(recorder);
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Returns the device under test.
    pub fn dut(&self) -> &D {
        &self.dut
    }

    /// Applies every vector in order and reports the results.
    ///
    /// Check failures go to `sink` as diagnostics and do not stop the run.
    pub fn run(
        &mut self,
        vectors: &[TestVector],
        sink: &DiagnosticSink,
    ) -> Result<BenchReport, BenchError> {
        self.open_waveform()?;

        let mut outcomes = Vec::with_capacity(vectors.len());
        for (i, vector) in vectors.iter().enumerate() {
            let outcome = self.apply(i + 1, vector)?;
            emit_diagnostics(&outcome, sink);
            outcomes.push(outcome);
        }

        if let Some(rec) = self.recorder.as_mut() {
            rec.finalize()?;
        }

        Ok(BenchReport {
            name: self.settings.name.clone(),
            outcomes,
            final_time: self.time,
        })
    }

    /// Applies one vector, waits for the settle delay, and samples.
    pub fn apply(&mut self, index: usize, vector: &TestVector) -> Result<VectorOutcome, BenchError> {
        let applied_at = self.time;
        self.dut.set_input(UI_IN, vector.ui_in)?;
        self.dut.set_input(UIO_IN, vector.uio_in)?;

        // Combinational output: it changes in the same time step as the inputs.
        for (slot, &port) in RECORDED.iter().enumerate() {
            let value = self.dut.sample(port)?;
            self.record(applied_at, slot, value)?;
        }

        self.time = self.time.advance(self.settings.settle);
        let sampled = OutputWord::from_word(self.dut.sample(UO_OUT)?)?;

        Ok(VectorOutcome {
            index,
            name: vector.name.clone(),
            ui_in: vector.ui_in.to_string(),
            uio_in: vector.uio_in.to_string(),
            expect: vector.expect,
            observed: sampled.to_string(),
            observed_value: sampled.to_u8(),
            encoding: sampled.decode(),
            applied_at,
            sampled_at: self.time,
            verdict: Verdict::check(vector.expect, &sampled),
        })
    }

    fn open_waveform(&mut self) -> Result<(), BenchError> {
        let Some(rec) = self.recorder.as_mut() else {
            return Ok(());
        };
        rec.begin_scope(&self.settings.name)?;
        for port in self.dut.ports() {
            rec.register_signal(port.name, port.width)?;
        }
        rec.end_scope()?;
        Ok(())
    }

    /// Records `value` for `RECORDED[slot]` if it differs from the last one.
    fn record(&mut self, time: SimTime, slot: usize, value: LogicWord) -> Result<(), BenchError> {
        let Some(rec) = self.recorder.as_mut() else {
            return Ok(());
        };
        if self.last_recorded[slot] == Some(value) {
            return Ok(());
        }
        self.last_recorded[slot] = Some(value);
        rec.record_change(time.fs, RECORDED[slot], &value)
    }
}

/// Emits the diagnostics for one outcome.
fn emit_diagnostics(outcome: &VectorOutcome, sink: &DiagnosticSink) {
    let subject = format!("vector {} \"{}\"", outcome.index, outcome.name);
    let inputs = format!("ui_in = {}, uio_in = {}", outcome.ui_in, outcome.uio_in);

    let diag = match outcome.verdict {
        Verdict::Pass if outcome.observed_value.is_none() => Diagnostic::warning(
            DiagnosticCode::UNRESOLVABLE_OUTPUT,
            format!("unresolvable output: uo_out = {}", outcome.observed),
        )
        .with_note(inputs),
        Verdict::Pass => Diagnostic::note(
            DiagnosticCode::VECTOR_PASSED,
            format!("uo_out = {} ({})", outcome.observed, outcome.encoding),
        ),
        Verdict::Mismatch { expected, observed } => {
            Diagnostic::error(DiagnosticCode::MISMATCH, "priority encoder output mismatch")
                .with_note(inputs)
                .with_note(format!("uo_out = {observed:08b}, expected = {expected:08b}"))
        }
        Verdict::UnexpectedUnresolved { expected } => Diagnostic::error(
            DiagnosticCode::UNEXPECTED_UNRESOLVED,
            format!("unresolvable output: uo_out = {}", outcome.observed),
        )
        .with_note(inputs)
        .with_note(format!("expected = {expected:08b}"))
        .with_help("an X or Z on any input bit makes every output bit X"),
        Verdict::ExpectedUnresolved { observed } => Diagnostic::error(
            DiagnosticCode::EXPECTED_UNRESOLVED,
            format!("output resolved to {observed:08b} where an unresolved output was expected"),
        )
        .with_note(inputs),
    };
    sink.emit(diag.with_subject(subject));
}
