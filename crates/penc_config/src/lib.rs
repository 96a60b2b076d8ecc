//! Parsing and validation of `penc.toml` bench configuration files.
//!
//! This crate reads the bench configuration (settle delay, waveform output,
//! stimulus vectors) and resolves it into strongly-typed [`ResolvedBench`]
//! settings with parsed [`TestVector`]s.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;
pub mod vector;

pub use error::ConfigError;
pub use loader::{
    load_config, load_config_file, load_config_from_str, render_config, starter_config,
    CONFIG_FILE_NAME,
};
pub use resolve::{resolve_bench, ResolvedBench};
pub use types::*;
pub use vector::{
    default_vectors, parse_hex_byte, parse_port, Expect, TestVector, VECTOR_PORT_WIDTH,
};
