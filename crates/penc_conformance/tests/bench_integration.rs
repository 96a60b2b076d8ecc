//! Configuration-to-bench integration: vectors from TOML text, failing
//! expectations, waveform output, and JSON reports.

use std::fs;

use penc_bench::Verdict;
use penc_common::SimTime;
use penc_conformance::run_config_str;
use penc_diagnostics::{DiagnosticCode, Severity};
use tempfile::TempDir;

const MIXED: &str = r#"
[bench]
name = "mixed"
settle = "5ns"

[[vectors]]
name = "bit 12"
ui_in = "0001_0000"
uio_in = "0001_0000"
expect = "0000_1100"

[[vectors]]
name = "wrong index"
ui_in = "00000000"
uio_in = "00000010"
expect = "00000000"

[[vectors]]
name = "z below a one"
ui_in = "10000000"
uio_in = "0000000z"
expect = "00001111"

[[vectors]]
name = "clean word expected unresolved"
ui_in = "00000000"
uio_in = "00000000"
expect = "unresolved"

[[vectors]]
ui_in = "x0000000"
uio_in = "00000000"
expect = "unresolved"
"#;

#[test]
fn verdicts_follow_expectations() {
    let run = run_config_str(MIXED, None).unwrap();
    let verdicts: Vec<Verdict> = run.report.outcomes.iter().map(|o| o.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::Pass,
            Verdict::Mismatch {
                expected: 0,
                observed: 1
            },
            Verdict::UnexpectedUnresolved { expected: 15 },
            Verdict::ExpectedUnresolved { observed: 0xF0 },
            Verdict::Pass,
        ]
    );
    assert_eq!(run.report.failed(), 3);
    assert_eq!(run.error_count, 3);
    assert_eq!(run.warning_count, 1);
    assert_eq!(run.codes(), vec!["N001", "E001", "E002", "E003", "W001"]);
}

#[test]
fn unnamed_vector_gets_positional_name() {
    let run = run_config_str(MIXED, None).unwrap();
    assert_eq!(run.report.outcomes[4].name, "vector 5");
    let warning = run
        .diagnostics
        .iter()
        .find(|d| d.severity == Severity::Warning)
        .unwrap();
    assert_eq!(warning.subject.as_deref(), Some("vector 5 \"vector 5\""));
}

#[test]
fn mismatch_diagnostic_carries_ports() {
    let run = run_config_str(MIXED, None).unwrap();
    let diag = run
        .diagnostics
        .iter()
        .find(|d| d.code == DiagnosticCode::MISMATCH)
        .unwrap();
    assert_eq!(diag.subject.as_deref(), Some("vector 2 \"wrong index\""));
    assert!(diag.notes.iter().any(|n| n == "ui_in = 00000000, uio_in = 00000010"));
}

#[test]
fn settle_delay_spaces_samples() {
    let run = run_config_str(MIXED, None).unwrap();
    let times: Vec<SimTime> = run.report.outcomes.iter().map(|o| o.sampled_at).collect();
    assert_eq!(times[0], SimTime::from_ns(5));
    assert_eq!(times[4], SimTime::from_ns(25));
    assert_eq!(run.report.final_time, SimTime::from_ns(25));
}

#[test]
fn empty_vector_list_runs_defaults() {
    let run = run_config_str("[bench]\nname = \"defaults\"\n", None).unwrap();
    assert_eq!(run.report.name, "defaults");
    assert_eq!(run.report.outcomes.len(), 9);
    assert!(run.report.all_passed());
}

#[test]
fn waveform_records_run() {
    let tmp = TempDir::new().unwrap();
    let vcd = tmp.path().join("mixed.vcd");
    run_config_str(MIXED, Some(&vcd)).unwrap();

    let content = fs::read_to_string(&vcd).unwrap();
    assert!(content.contains("$timescale\n  1fs\n$end"));
    assert!(content.contains("$scope module mixed $end"));
    assert!(content.contains("$var wire 8 ! ui_in $end"));
    assert!(content.contains("$var wire 8 # uo_out $end"));
    assert!(content.contains("#0\n"));
    assert!(content.contains("#5000000\n"));
    // Third vector drives a Z and the output goes unknown.
    assert!(content.contains("b0000000z \""));
    assert!(content.contains("bxxxxxxxx #"));
    // Initial values sit in a closed $dumpvars block before the next timestamp.
    assert!(content.contains("#0\n$dumpvars\nb00010000 !\nb00010000 \"\nb00001100 #\n$end\n#5000000\n"));
}

#[test]
fn bench_name_with_whitespace_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let vcd = tmp.path().join("spaced.vcd");
    let err = run_config_str("[bench]\nname = \"my bench\"\n", Some(&vcd))
        .err()
        .unwrap();
    assert!(err.to_string().contains("invalid bench.name"));
    assert!(!vcd.exists());
}

#[test]
fn report_serializes_to_json() {
    let run = run_config_str(MIXED, None).unwrap();
    let json = serde_json::to_value(&run.report).unwrap();
    assert_eq!(json["name"], "mixed");
    let second = &json["outcomes"][1];
    assert_eq!(second["verdict"]["verdict"], "mismatch");
    assert_eq!(second["verdict"]["observed"], 1);
    assert_eq!(second["expect"]["kind"], "value");
    assert_eq!(json["outcomes"][2]["observed_value"], serde_json::Value::Null);
}

#[test]
fn bad_settle_is_rejected() {
    let err = run_config_str("[bench]\nname = \"t\"\nsettle = \"10\"\n", None)
        .err()
        .unwrap();
    assert!(err.to_string().contains("invalid settle delay"));
}
