//! `penc encode`: evaluate the encoder for one pair of port values.

use penc_common::LogicWord;
use penc_config::{parse_hex_byte, parse_port};
use penc_encoder::{encode_ports, PORT_WIDTH};

use crate::{EncodeArgs, ReportFormat};

/// Runs the `penc encode` command. Prints the output word to stdout.
pub fn run(args: &EncodeArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let ui_in = parse_operand(&args.ui_in).map_err(|e| format!("ui_in: {e}"))?;
    let uio_in = parse_operand(&args.uio_in).map_err(|e| format!("uio_in: {e}"))?;
    let out = encode_ports(&ui_in, &uio_in)?;

    match args.format {
        ReportFormat::Text => println!("{out}  ({})", out.decode()),
        ReportFormat::Json => {
            let value = serde_json::json!({
                "ui_in": ui_in.to_string(),
                "uio_in": uio_in.to_string(),
                "uo_out": out.to_string(),
                "encoding": out.decode(),
            });
            println!("{value}");
        }
    }
    Ok(0)
}

/// Parses a port operand: a `0x` hex byte or an 8-character bit string.
fn parse_operand(s: &str) -> Result<LogicWord, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let value = parse_hex_byte(hex).ok_or_else(|| format!("'{s}' is not a hex byte"))?;
        return Ok(LogicWord::from_u64(u64::from(value), PORT_WIDTH));
    }
    parse_port(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_forms() {
        assert_eq!(parse_operand("0x80").unwrap().to_u64(), Some(0x80));
        assert_eq!(parse_operand("0XfF").unwrap().to_u64(), Some(0xFF));
        assert_eq!(parse_operand("0001_0000").unwrap().to_u64(), Some(0x10));
        assert_eq!(parse_operand("xxxxxxxx").unwrap(), LogicWord::all_x(8));
    }

    #[test]
    fn operand_errors() {
        assert!(parse_operand("0x100").is_err());
        assert!(parse_operand("0xg0").is_err());
        assert!(parse_operand("0x+f").is_err());
        assert!(parse_operand("0x-1").is_err());
        assert!(parse_operand("0101").is_err());
        assert!(parse_operand("0101010q").is_err());
    }

    #[test]
    fn encode_runs() {
        let args = EncodeArgs {
            ui_in: "00010000".into(),
            uio_in: "0x10".into(),
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args).unwrap(), 0);
    }

    #[test]
    fn encode_rejects_bad_operand() {
        let args = EncodeArgs {
            ui_in: "0001".into(),
            uio_in: "0x10".into(),
            format: ReportFormat::Json,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("ui_in:"));
    }
}
