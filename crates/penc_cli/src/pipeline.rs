//! Shared CLI plumbing: configuration lookup and diagnostic rendering.

use std::path::PathBuf;

use penc_config::{
    load_config_file, resolve_bench, BenchConfig, ResolvedBench, CONFIG_FILE_NAME,
};
use penc_diagnostics::{
    Diagnostic, DiagnosticRenderer, JsonRenderer, Severity, TerminalRenderer,
};

use crate::{GlobalArgs, ReportFormat};

/// Finds the configuration file to use, if any.
///
/// `--config` may name the file itself or a directory holding `penc.toml`;
/// either must exist. Without `--config`, `penc.toml` in the current
/// directory is used when present.
pub fn find_config_file(
    global: &GlobalArgs,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_dir() {
            let file = p.join(CONFIG_FILE_NAME);
            if !file.is_file() {
                return Err(format!("no {CONFIG_FILE_NAME} in '{}'", p.display()).into());
            }
            return Ok(Some(file));
        }
        if !p.is_file() {
            return Err(format!("config file '{}' not found", p.display()).into());
        }
        return Ok(Some(p));
    }
    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    Ok(local.is_file().then_some(local))
}

/// Loads and resolves the bench configuration, or the defaults when there is
/// no configuration file.
pub fn load_bench(global: &GlobalArgs) -> Result<ResolvedBench, Box<dyn std::error::Error>> {
    match find_config_file(global)? {
        Some(path) => {
            let config = load_config_file(&path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            Ok(resolve_bench(&config, path.parent())?)
        }
        None => Ok(resolve_bench(&BenchConfig::default(), None)?),
    }
}

/// Returns `true` if a diagnostic of this severity should be shown.
///
/// Errors always show; warnings unless `--quiet`; notes and help only with
/// `--verbose`.
pub fn is_visible(severity: Severity, global: &GlobalArgs) -> bool {
    match severity {
        Severity::Error => true,
        Severity::Warning => !global.quiet,
        Severity::Note | Severity::Help => global.verbose && !global.quiet,
    }
}

/// Renders diagnostics to stderr. Returns the number rendered.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    global: &GlobalArgs,
    format: ReportFormat,
) -> usize {
    let renderer: Box<dyn DiagnosticRenderer> = match format {
        ReportFormat::Text => Box::new(TerminalRenderer::new(global.color)),
        ReportFormat::Json => Box::new(JsonRenderer),
    };
    let mut shown = 0;
    for diag in diagnostics.iter().filter(|d| is_visible(d.severity, global)) {
        match format {
            ReportFormat::Text => eprintln!("{}", renderer.render(diag)),
            ReportFormat::Json => eprintln!("{}", renderer.render(diag).trim_end()),
        }
        shown += 1;
    }
    shown
}
