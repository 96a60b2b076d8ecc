//! `penc init`: write a starter `penc.toml`.
//!
//! The starter file lists the nine default vectors explicitly so they can be
//! edited in place.

use std::fs;
use std::path::PathBuf;

use penc_config::{render_config, starter_config, CONFIG_FILE_NAME};

use crate::GlobalArgs;

/// Runs the `penc init` command.
///
/// Writes into `dir` (created if missing) or the current directory. Refuses
/// to overwrite an existing `penc.toml`.
pub fn run(dir: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let target_dir = match dir {
        Some(d) => {
            let d = PathBuf::from(d);
            fs::create_dir_all(&d)?;
            d
        }
        None => std::env::current_dir()?,
    };

    let path = target_dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()).into());
    }

    let content = render_config(&starter_config())?;
    fs::write(&path, content)?;

    if !global.quiet {
        eprintln!("     Created {}", path.display());
    }
    Ok(0)
}
