//! penc CLI: command-line front end for the 16-bit priority encoder.
//!
//! Provides `penc encode` for evaluating a single input pair, `penc run` for
//! driving the bench with the configured vectors, `penc sweep` for the
//! exhaustive check, and `penc init` for writing a starter `penc.toml`.

#![warn(missing_docs)]

mod encode;
mod init;
mod pipeline;
mod run;
mod sweep;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// penc: a 16-bit priority encoder model and bench.
#[derive(Parser, Debug)]
#[command(name = "penc", version, about = "16-bit priority encoder")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output, including passing vectors.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `penc.toml` file, or a directory containing one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode one pair of port values.
    Encode(EncodeArgs),
    /// Drive the bench with the configured vectors.
    Run(RunArgs),
    /// Check every resolved input and every single-undefined-bit input.
    Sweep(SweepArgs),
    /// Write a starter `penc.toml`.
    Init {
        /// Directory to write into. Defaults to the current directory.
        dir: Option<String>,
    },
}

/// Arguments for the `penc encode` subcommand.
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Port A, the high byte: 8 bits of `0 1 x z` or a `0x` hex byte.
    pub ui_in: String,

    /// Port B, the low byte: 8 bits of `0 1 x z` or a `0x` hex byte.
    pub uio_in: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `penc run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Output format for the report and diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write a VCD waveform to this path, overriding `bench.waveform`.
    #[arg(long)]
    pub waveform: Option<String>,

    /// Disable waveform recording.
    #[arg(long, conflicts_with = "waveform")]
    pub no_waveform: bool,
}

/// Arguments for the `penc sweep` subcommand.
#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report and diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => atty_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Encode(ref args) => encode::run(args),
        Command::Run(ref args) => run::run(args, &global),
        Command::Sweep(ref args) => sweep::run(args, &global),
        Command::Init { dir } => init::run(dir, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough terminal detection: a set `TERM` counts as a terminal.
fn atty_is_terminal() -> bool {
    std::env::var("TERM").is_ok()
}
