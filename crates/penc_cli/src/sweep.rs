//! `penc sweep`: exhaustive check of the encoder.

use penc_bench::SweepReport;

use crate::{GlobalArgs, ReportFormat, SweepArgs};

/// Runs the `penc sweep` command. Exits with code 1 on any mismatch.
pub fn run(args: &SweepArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let text = args.format == ReportFormat::Text;
    if text && !global.quiet {
        eprintln!("   Sweeping all resolved and single-undefined-bit inputs");
    }

    let report = penc_bench::sweep();

    match args.format {
        ReportFormat::Text => print_report(&report, global),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

fn print_report(report: &SweepReport, global: &GlobalArgs) {
    // Mismatches are errors and print even under --quiet.
    for m in &report.mismatches {
        eprintln!(
            "   FAIL  {}: expected {}, observed {}",
            m.input, m.expected, m.observed
        );
    }
    let hidden = report.mismatch_count - report.mismatches.len() as u64;
    if hidden > 0 {
        eprintln!("   ... and {hidden} more");
    }
    if !global.quiet {
        eprintln!(
            "   Result: {} mismatch(es) out of {} input(s)",
            report.mismatch_count, report.checked
        );
    }
}
