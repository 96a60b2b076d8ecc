//! Configuration types deserialized from `penc.toml`.

use serde::{Deserialize, Serialize};

/// Settle delay used when the configuration does not give one.
pub const DEFAULT_SETTLE: &str = "10ns";

/// The top-level bench configuration parsed from `penc.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Bench-wide settings.
    pub bench: BenchSection,
    /// Stimulus vectors. Empty means the built-in default set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vectors: Vec<VectorEntry>,
}

/// The `[bench]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSection {
    /// Bench name, used as the waveform scope.
    pub name: String,
    /// Delay between applying a vector and sampling the output (e.g. `"10ns"`).
    #[serde(default = "default_settle")]
    pub settle: String,
    /// Optional waveform output path, relative to the configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform: Option<String>,
}

impl Default for BenchSection {
    fn default() -> Self {
        Self {
            name: "priority_encoder".to_string(),
            settle: default_settle(),
            waveform: None,
        }
    }
}

fn default_settle() -> String {
    DEFAULT_SETTLE.to_string()
}

/// One `[[vectors]]` entry as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEntry {
    /// Optional label; defaults to `vector <n>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bit string for port A (high byte).
    pub ui_in: String,
    /// Bit string for port B (low byte).
    pub uio_in: String,
    /// Expected `uo_out`: an 8-bit binary string or `"unresolved"`.
    pub expect: String,
}
