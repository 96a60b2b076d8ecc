//! Resolution of a parsed configuration into typed bench settings.

use crate::error::ConfigError;
use crate::types::BenchConfig;
use crate::vector::{default_vectors, TestVector};
use penc_common::SimTime;
use std::path::{Path, PathBuf};

/// Bench settings with every string field parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBench {
    /// Bench name.
    pub name: String,
    /// Delay between applying a vector and sampling the output.
    pub settle: SimTime,
    /// Waveform output path, anchored at the configuration directory.
    pub waveform: Option<PathBuf>,
    /// Vectors to apply, in order.
    pub vectors: Vec<TestVector>,
}

/// Parses durations and vectors, substituting the default vector set when
/// the file lists none. Relative waveform paths are joined onto `base_dir`.
pub fn resolve_bench(
    config: &BenchConfig,
    base_dir: Option<&Path>,
) -> Result<ResolvedBench, ConfigError> {
    let settle: SimTime = config.bench.settle.parse()?;

    let vectors = if config.vectors.is_empty() {
        default_vectors()
    } else {
        config
            .vectors
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                TestVector::from_entry(i + 1, entry).map_err(|reason| ConfigError::InvalidVector {
                    index: i + 1,
                    name: entry.name.clone().unwrap_or_else(|| format!("vector {}", i + 1)),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let waveform = config.bench.waveform.as_ref().map(|p| {
        let path = PathBuf::from(p);
        match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    });

    Ok(ResolvedBench {
        name: config.bench.name.clone(),
        settle,
        waveform,
        vectors,
    })
}
