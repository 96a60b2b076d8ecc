//! The 8-bit encoder output and its decoded reading.

use penc_common::LogicWord;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EncodeError;
use crate::ports::OUTPUT_WIDTH;

/// Output produced for an all-zero input: status `1111`, index `0000`.
pub const SENTINEL: u8 = 0b1111_0000;

/// Status nibble reported when no input bit is set.
pub const NONE_SET_STATUS: u8 = 0b1111;

/// The 8-bit output word of the encoder.
///
/// Bits 3..0 hold the index and bits 7..4 the status nibble. The word may
/// carry undefined bits, so callers must check [`is_resolvable`](Self::is_resolvable)
/// (or use [`to_u8`](Self::to_u8), which returns `None`) before reading it
/// as an integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "LogicWord")]
pub struct OutputWord(LogicWord);

impl TryFrom<LogicWord> for OutputWord {
    type Error = EncodeError;

    fn try_from(word: LogicWord) -> Result<Self, Self::Error> {
        Self::from_word(word)
    }
}

impl OutputWord {
    /// Creates a fully resolved output word.
    pub fn from_u8(value: u8) -> Self {
        Self(LogicWord::from_u64(u64::from(value), OUTPUT_WIDTH))
    }

    /// The output driven for unresolvable input: every bit `X`.
    pub fn unresolved() -> Self {
        Self(LogicWord::all_x(OUTPUT_WIDTH))
    }

    /// Wraps a sampled 8-bit logic word.
    pub fn from_word(word: LogicWord) -> Result<Self, EncodeError> {
        if word.width() != OUTPUT_WIDTH {
            return Err(EncodeError::PortWidth {
                port: "uo_out".into(),
                expected: OUTPUT_WIDTH,
                actual: word.width(),
            });
        }
        Ok(Self(word))
    }

    /// Returns the underlying logic word.
    pub fn as_word(&self) -> &LogicWord {
        &self.0
    }

    /// Returns `true` when no output bit is undefined.
    pub fn is_resolvable(&self) -> bool {
        self.0.is_resolvable()
    }

    /// Returns the output as an integer, or `None` if any bit is undefined.
    pub fn to_u8(&self) -> Option<u8> {
        self.0.to_u64().map(|v| v as u8)
    }

    /// Returns the status nibble (bits 7..4) if resolved.
    pub fn status(&self) -> Option<u8> {
        self.to_u8().map(|v| v >> 4)
    }

    /// Returns the index nibble (bits 3..0) if resolved.
    pub fn index(&self) -> Option<u8> {
        self.to_u8().map(|v| v & 0x0F)
    }

    /// Interprets the output word.
    pub fn decode(&self) -> Encoding {
        match self.to_u8() {
            None => Encoding::Unresolved,
            Some(SENTINEL) => Encoding::NoneSet,
            Some(v) if v >> 4 == 0 => Encoding::Index(v),
            Some(v) => Encoding::Malformed(v),
        }
    }
}

impl fmt::Display for OutputWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The meaning of an [`OutputWord`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Encoding {
    /// The highest set input bit is at this index (0–15).
    Index(u8),
    /// No input bit is set.
    NoneSet,
    /// At least one output bit is undefined.
    Unresolved,
    /// A resolved value the encoder never drives (nonzero status other than the sentinel).
    Malformed(u8),
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Index(i) => write!(f, "index {i}"),
            Encoding::NoneSet => write!(f, "no bit set"),
            Encoding::Unresolved => write!(f, "unresolved"),
            Encoding::Malformed(v) => write!(f, "malformed {v:08b}"),
        }
    }
}
