//! Typed stimulus vectors and their expectations.

use penc_common::LogicWord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::types::VectorEntry;

/// Width of every port a vector drives or checks.
pub const VECTOR_PORT_WIDTH: u32 = 8;

/// What a vector expects to observe on `uo_out`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expect {
    /// A fully resolved output with this value.
    Value(u8),
    /// An output carrying at least one undefined bit.
    Unresolved,
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expect::Value(v) => write!(f, "{v:08b}"),
            Expect::Unresolved => write!(f, "unresolved"),
        }
    }
}

impl FromStr for Expect {
    type Err = String;

    /// Accepts `"unresolved"`, an 8-bit binary string, or a `0x` hex byte.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unresolved") {
            return Ok(Expect::Unresolved);
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return parse_hex_byte(hex)
                .map(Expect::Value)
                .ok_or_else(|| format!("invalid hex expectation '{s}'"));
        }
        let word = parse_port(s)?;
        word.to_u64()
            .map(|v| Expect::Value(v as u8))
            .ok_or_else(|| format!("expectation '{s}' has undefined bits; use \"unresolved\""))
    }
}

/// Parses the digits of a hex byte, without the `0x` prefix.
///
/// Only hex digits are accepted, so a signed form such as `+f` is rejected.
pub fn parse_hex_byte(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// A parsed stimulus vector.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct TestVector {
    /// Label shown in reports.
    pub name: String,
    /// Value driven onto `ui_in`.
    pub ui_in: LogicWord,
    /// Value driven onto `uio_in`.
    pub uio_in: LogicWord,
    /// Expected `uo_out`.
    pub expect: Expect,
}

impl TestVector {
    /// Builds a vector with fully defined port values.
    pub fn defined(name: &str, ui_in: u8, uio_in: u8, expect: Expect) -> Self {
        Self {
            name: name.to_string(),
            ui_in: LogicWord::from_u64(u64::from(ui_in), VECTOR_PORT_WIDTH),
            uio_in: LogicWord::from_u64(u64::from(uio_in), VECTOR_PORT_WIDTH),
            expect,
        }
    }

    /// Parses a vector from its file form. `index` is one-based.
    pub fn from_entry(index: usize, entry: &VectorEntry) -> Result<Self, String> {
        let ui_in = parse_port(&entry.ui_in).map_err(|e| format!("ui_in: {e}"))?;
        let uio_in = parse_port(&entry.uio_in).map_err(|e| format!("uio_in: {e}"))?;
        let expect = entry.expect.parse().map_err(|e| format!("expect: {e}"))?;
        Ok(Self {
            name: entry
                .name
                .clone()
                .unwrap_or_else(|| format!("vector {index}")),
            ui_in,
            uio_in,
            expect,
        })
    }

    /// Converts back to the file form.
    pub fn to_entry(&self) -> VectorEntry {
        VectorEntry {
            name: Some(self.name.clone()),
            ui_in: self.ui_in.to_string(),
            uio_in: self.uio_in.to_string(),
            expect: self.expect.to_string(),
        }
    }
}

/// Parses an 8-bit port value from a bit string (`0 1 x z`, `_` allowed).
pub fn parse_port(s: &str) -> Result<LogicWord, String> {
    let word = LogicWord::from_binary_str(s.trim())
        .ok_or_else(|| format!("'{s}' is not a bit string of 0, 1, x, z"))?;
    if word.width() != VECTOR_PORT_WIDTH {
        return Err(format!(
            "must be {VECTOR_PORT_WIDTH} bits, got {}",
            word.width()
        ));
    }
    Ok(word)
}

/// The nine reference scenarios: edge cases of the encoding policy.
pub fn default_vectors() -> Vec<TestVector> {
    use Expect::Value;
    vec![
        TestVector::defined("all zeros", 0b0000_0000, 0b0000_0000, Value(0b1111_0000)),
        TestVector::defined("single one at msb", 0b1000_0000, 0b0000_0000, Value(0b0000_1111)),
        TestVector::defined("single one at lsb", 0b0000_0000, 0b0000_0001, Value(0b0000_0000)),
        TestVector::defined("single one at bit 7", 0b0000_0000, 0b1000_0000, Value(0b0000_0111)),
        TestVector::defined("all ones", 0b1111_1111, 0b1111_1111, Value(0b0000_1111)),
        TestVector::defined("alternating", 0b1010_1010, 0b1010_1010, Value(0b0000_1111)),
        TestVector::defined("single one in the middle", 0b0000_0000, 0b0001_0000, Value(0b0000_0100)),
        TestVector::defined("first one at bit 12", 0b0001_0000, 0b0001_0000, Value(0b0000_1100)),
        TestVector {
            name: "all unknown".to_string(),
            ui_in: LogicWord::all_x(VECTOR_PORT_WIDTH),
            uio_in: LogicWord::all_x(VECTOR_PORT_WIDTH),
            expect: Expect::Unresolved,
        },
    ]
}
