//! `penc run`: drive the bench with the configured vectors.
//!
//! Loads `penc.toml` (or the defaults), applies every vector to the encoder
//! model, renders the resulting diagnostics, and prints per-vector status and
//! a summary line. Exits with code 1 if any vector failed.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use penc_bench::{Bench, BenchReport, BenchSettings, VcdRecorder, VectorOutcome};
use penc_diagnostics::DiagnosticSink;
use penc_encoder::PriorityEncoder;

use crate::pipeline::{load_bench, render_diagnostics};
use crate::{GlobalArgs, ReportFormat, RunArgs};

/// Runs the `penc run` command.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let resolved = load_bench(global)?;
    let settings = BenchSettings::from(&resolved);
    let text = args.format == ReportFormat::Text;

    if text && !global.quiet {
        eprintln!(
            "   Running {} ({} vector(s), settle {})",
            settings.name,
            resolved.vectors.len(),
            settings.settle
        );
    }

    let waveform_path = waveform_path(args, resolved.waveform.as_deref());
    let mut bench = Bench::new(PriorityEncoder::new(), settings);
    if let Some(ref path) = waveform_path {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        bench.set_recorder(Box::new(VcdRecorder::new(writer)));
    }

    let sink = DiagnosticSink::new();
    let report = bench.run(&resolved.vectors, &sink)?;
    render_diagnostics(&sink.take_all(), global, args.format);

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                for outcome in &report.outcomes {
                    print_outcome(outcome);
                }
                print_summary(&report, sink.warning_count());
                if let Some(ref path) = waveform_path {
                    eprintln!("   Waveform written to {}", path.display());
                }
            }
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.all_passed() {
        Ok(0)
    } else {
        Ok(1)
    }
}

/// Picks the waveform output: `--no-waveform` wins, then `--waveform`, then
/// `bench.waveform` from the configuration.
fn waveform_path(args: &RunArgs, configured: Option<&Path>) -> Option<PathBuf> {
    if args.no_waveform {
        return None;
    }
    args.waveform
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

fn print_outcome(outcome: &VectorOutcome) {
    let status = if outcome.verdict.passed() { "PASS" } else { "FAIL" };
    eprintln!(
        "   {status}  {name}: uo_out = {observed} ({encoding})",
        name = outcome.name,
        observed = outcome.observed,
        encoding = outcome.encoding,
    );
}

fn print_summary(report: &BenchReport, warnings: usize) {
    eprintln!();
    eprintln!(
        "   Result: {} passed, {} failed, {} warning(s) out of {} vector(s) ({})",
        report.passed(),
        report.failed(),
        warnings,
        report.outcomes.len(),
        report.final_time
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use penc_config::CONFIG_FILE_NAME;
    use tempfile::TempDir;

    fn args(waveform: Option<String>, no_waveform: bool) -> RunArgs {
        RunArgs {
            format: ReportFormat::Text,
            waveform,
            no_waveform,
        }
    }

    fn global_for(dir: &Path) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(dir.to_str().unwrap().to_string()),
        }
    }

    #[test]
    fn waveform_precedence() {
        let configured = Path::new("/cfg/penc.vcd");
        assert_eq!(waveform_path(&args(None, true), Some(configured)), None);
        assert_eq!(
            waveform_path(&args(Some("cli.vcd".into()), false), Some(configured)),
            Some(PathBuf::from("cli.vcd"))
        );
        assert_eq!(
            waveform_path(&args(None, false), Some(configured)),
            Some(configured.to_path_buf())
        );
        assert_eq!(waveform_path(&args(None, false), None), None);
    }

    #[test]
    fn default_vectors_pass() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[bench]\nname = \"t\"\n").unwrap();
        let code = run(&args(None, true), &global_for(tmp.path())).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn failing_vector_exits_one() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[bench]
name = "t"

[[vectors]]
name = "wrong"
ui_in = "00000000"
uio_in = "00000001"
expect = "00000001"
"#,
        )
        .unwrap();
        let code = run(&args(None, true), &global_for(tmp.path())).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn writes_waveform() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[bench]\nname = \"tb\"\n").unwrap();
        let vcd = tmp.path().join("out").join("tb.vcd");
        let code = run(
            &args(Some(vcd.to_str().unwrap().into()), false),
            &global_for(tmp.path()),
        )
        .unwrap();
        assert_eq!(code, 0);
        let content = fs::read_to_string(&vcd).unwrap();
        assert!(content.contains("$scope module tb $end"));
        assert!(content.contains("$var wire 8 \" uio_in $end"));
        assert!(content.contains("bxxxxxxxx"));
        let dump = content.split("$dumpvars\n").nth(1).unwrap();
        assert!(dump.lines().take(4).any(|l| l == "$end"));
    }

    #[test]
    fn rejects_bench_name_with_whitespace() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[bench]\nname = \"my bench\"\n").unwrap();
        let err = run(&args(None, true), &global_for(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("bench.name"));
    }

    #[test]
    fn invalid_vector_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[bench]
name = "t"

[[vectors]]
ui_in = "0000"
uio_in = "00000001"
expect = "00000000"
"#,
        )
        .unwrap();
        let err = run(&args(None, true), &global_for(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("invalid vector 1"));
    }
}
