//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::BenchConfig;
use crate::vector::default_vectors;
use std::path::Path;

/// File name looked up inside a bench directory.
pub const CONFIG_FILE_NAME: &str = "penc.toml";

/// Loads and validates `<dir>/penc.toml`.
pub fn load_config(dir: &Path) -> Result<BenchConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<BenchConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BenchConfig, ConfigError> {
    let config: BenchConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Serializes a configuration back to TOML.
pub fn render_config(config: &BenchConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
}

/// A starter `penc.toml` listing the default vectors explicitly.
pub fn starter_config() -> BenchConfig {
    let mut config = BenchConfig::default();
    config.vectors = default_vectors().iter().map(|v| v.to_entry()).collect();
    config
}

/// Validates that required fields are present and that the bench name can
/// serve as a waveform scope identifier.
///
/// Field contents (bit strings, durations) are checked during resolution.
fn validate_config(config: &BenchConfig) -> Result<(), ConfigError> {
    let name = &config.bench.name;
    if name.trim().is_empty() {
        return Err(ConfigError::MissingField("bench.name".to_string()));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::InvalidField {
            field: "bench.name".to_string(),
            reason: format!("'{name}' must not contain whitespace"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_SETTLE;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[bench]
name = "penc"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.bench.name, "penc");
        assert_eq!(config.bench.settle, DEFAULT_SETTLE);
        assert!(config.bench.waveform.is_none());
        assert!(config.vectors.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[bench]
name = "penc"
settle = "5ns"
waveform = "out/penc.vcd"

[[vectors]]
name = "all zeros"
ui_in = "00000000"
uio_in = "00000000"
expect = "11110000"

[[vectors]]
ui_in = "xxxxxxxx"
uio_in = "xxxxxxxx"
expect = "unresolved"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.bench.settle, "5ns");
        assert_eq!(config.bench.waveform.as_deref(), Some("out/penc.vcd"));
        assert_eq!(config.vectors.len(), 2);
        assert_eq!(config.vectors[0].name.as_deref(), Some("all zeros"));
        assert!(config.vectors[1].name.is_none());
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[bench]
name = "  "
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn name_with_whitespace_errors() {
        for name in ["my bench", "tab\tname", " padded"] {
            let toml = format!("[bench]\nname = \"{name}\"\n");
            let err = load_config_from_str(&toml).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidField { ref field, .. } if field == "bench.name"),
                "{name:?} accepted"
            );
        }
        assert!(load_config_from_str("[bench]\nname = \"tb.penc-2\"\n").is_ok());
    }

    #[test]
    fn missing_bench_table_errors() {
        let err = load_config_from_str("").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn vector_missing_port_errors() {
        let toml = r#"
[bench]
name = "penc"

[[vectors]]
ui_in = "00000000"
expect = "11110000"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn starter_config_roundtrips() {
        let text = render_config(&starter_config()).unwrap();
        assert!(text.contains("[[vectors]]"));
        let back = load_config_from_str(&text).unwrap();
        assert_eq!(back, starter_config());
        assert_eq!(back.vectors.len(), 9);
    }

    #[test]
    fn load_from_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[bench]\nname = \"from_dir\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.bench.name, "from_dir");
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
