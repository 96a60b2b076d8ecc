//! Bench error types.
//!
//! Vector failures are not errors: they are reported as diagnostics and the
//! run continues. [`BenchError`] covers the cases where the bench itself
//! cannot proceed.

use std::io;

use penc_encoder::EncodeError;

/// Errors that stop a bench run.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The device rejected a port access.
    #[error("port access failed: {0}")]
    Port(#[from] EncodeError),

    /// An I/O error occurred while writing waveform data.
    #[error("waveform I/O error: {0}")]
    WaveformIo(#[from] io::Error),

    /// A value change was recorded for a signal that was never registered.
    #[error("unregistered waveform signal '{0}'")]
    UnregisteredSignal(String),
}
