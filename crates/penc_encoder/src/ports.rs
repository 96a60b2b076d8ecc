//! Port widths and the concatenated 16-bit input word.

use penc_common::LogicWord;
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Width of each input port.
pub const PORT_WIDTH: u32 = 8;
/// Width of the concatenated input word.
pub const INPUT_WIDTH: u32 = 2 * PORT_WIDTH;
/// Width of the encoder output.
pub const OUTPUT_WIDTH: u32 = 8;

/// The 16-bit word the encoder scans.
///
/// Port A (`ui_in`) occupies bits 15..8 and port B (`uio_in`) bits 7..0.
/// The width is fixed by construction, which keeps [`encode`](crate::encode)
/// total.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "LogicWord")]
pub struct InputWord(LogicWord);

impl TryFrom<LogicWord> for InputWord {
    type Error = EncodeError;

    fn try_from(word: LogicWord) -> Result<Self, Self::Error> {
        Self::from_word(word)
    }
}

impl InputWord {
    /// Concatenates the two ports, `ui_in` high and `uio_in` low.
    pub fn from_ports(ui_in: &LogicWord, uio_in: &LogicWord) -> Result<Self, EncodeError> {
        check_port("ui_in", ui_in)?;
        check_port("uio_in", uio_in)?;
        let word = LogicWord::concat(ui_in, uio_in).ok_or(EncodeError::PortWidth {
            port: "ui_in".into(),
            expected: PORT_WIDTH,
            actual: ui_in.width(),
        })?;
        Ok(Self(word))
    }

    /// Wraps an already concatenated 16-bit word.
    pub fn from_word(word: LogicWord) -> Result<Self, EncodeError> {
        if word.width() != INPUT_WIDTH {
            return Err(EncodeError::PortWidth {
                port: "word".into(),
                expected: INPUT_WIDTH,
                actual: word.width(),
            });
        }
        Ok(Self(word))
    }

    /// Creates a fully defined input word.
    pub fn from_u16(value: u16) -> Self {
        Self(LogicWord::from_u64(u64::from(value), INPUT_WIDTH))
    }

    /// Creates an input word from raw value and unknown planes.
    ///
    /// A set `unknown` bit reads as `Z` where `value` is set, `X` otherwise.
    pub fn from_planes(value: u16, unknown: u16) -> Self {
        Self(LogicWord::from_planes(
            u64::from(value),
            u64::from(unknown),
            INPUT_WIDTH,
        ))
    }

    /// Returns the underlying logic word.
    pub fn as_word(&self) -> &LogicWord {
        &self.0
    }

    /// Returns the high byte (`ui_in`).
    pub fn ui_in(&self) -> LogicWord {
        self.0.slice(PORT_WIDTH, PORT_WIDTH)
    }

    /// Returns the low byte (`uio_in`).
    pub fn uio_in(&self) -> LogicWord {
        self.0.slice(0, PORT_WIDTH)
    }

    /// Returns the integer value if no bit is undefined.
    pub fn to_u16(&self) -> Option<u16> {
        self.0.to_u64().map(|v| v as u16)
    }
}

fn check_port(name: &str, value: &LogicWord) -> Result<(), EncodeError> {
    if value.width() != PORT_WIDTH {
        return Err(EncodeError::PortWidth {
            port: name.to_string(),
            expected: PORT_WIDTH,
            actual: value.width(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use penc_common::Logic;

    #[test]
    fn port_a_is_high_byte() {
        let a = LogicWord::from_u64(0b1000_0000, 8);
        let b = LogicWord::from_u64(0, 8);
        let w = InputWord::from_ports(&a, &b).unwrap();
        assert_eq!(w.to_u16(), Some(0x8000));
        assert_eq!(w.as_word().get(15), Logic::One);
    }

    #[test]
    fn port_b_is_low_byte() {
        let a = LogicWord::from_u64(0, 8);
        let b = LogicWord::from_u64(1, 8);
        let w = InputWord::from_ports(&a, &b).unwrap();
        assert_eq!(w.to_u16(), Some(0x0001));
    }

    #[test]
    fn swapping_ports_changes_word() {
        let a = LogicWord::from_u64(0x12, 8);
        let b = LogicWord::from_u64(0x34, 8);
        let ab = InputWord::from_ports(&a, &b).unwrap();
        let ba = InputWord::from_ports(&b, &a).unwrap();
        assert_eq!(ab.to_u16(), Some(0x1234));
        assert_eq!(ba.to_u16(), Some(0x3412));
    }

    #[test]
    fn split_back_into_ports() {
        let a = LogicWord::from_binary_str("1x00_0000").unwrap();
        let b = LogicWord::from_binary_str("0000_z001").unwrap();
        let w = InputWord::from_ports(&a, &b).unwrap();
        assert_eq!(w.ui_in(), a);
        assert_eq!(w.uio_in(), b);
        assert_eq!(w.to_u16(), None);
    }

    #[test]
    fn wrong_port_width_rejected() {
        let a = LogicWord::from_u64(0, 4);
        let b = LogicWord::from_u64(0, 8);
        let err = InputWord::from_ports(&a, &b).unwrap_err();
        assert_eq!(
            err,
            EncodeError::PortWidth {
                port: "ui_in".into(),
                expected: 8,
                actual: 4
            }
        );
        let err = InputWord::from_ports(&b, &LogicWord::new(9)).unwrap_err();
        assert!(matches!(err, EncodeError::PortWidth { ref port, .. } if port == "uio_in"));
    }

    #[test]
    fn from_word_checks_width() {
        assert!(InputWord::from_word(LogicWord::new(16)).is_ok());
        assert!(InputWord::from_word(LogicWord::new(15)).is_err());
    }

    #[test]
    fn from_u16_roundtrip() {
        assert_eq!(InputWord::from_u16(0xBEEF).to_u16(), Some(0xBEEF));
    }

    #[test]
    fn from_planes_marks_x_and_z() {
        let w = InputWord::from_planes(0b1000_0000_0000_0010, 0b0000_0000_0000_0011);
        assert_eq!(w.as_word().to_string(), "10000000000000zx");
        assert_eq!(w.to_u16(), None);
    }

    #[test]
    fn deserialize_checks_width() {
        let err = serde_json::from_str::<InputWord>(r#"{"width":8,"value":1,"unknown":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("is 16 bits wide, got a 8-bit value"));

        let w: InputWord =
            serde_json::from_str(r#"{"width":16,"value":32768,"unknown":0}"#).unwrap();
        assert_eq!(crate::encode(&w).to_u8(), Some(15));
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(serde_json::from_str::<InputWord>(&json).unwrap(), w);
    }

    #[test]
    fn deserialize_rejects_unknown_above_width() {
        assert!(
            serde_json::from_str::<InputWord>(r#"{"width":16,"value":0,"unknown":65536}"#).is_err()
        );
    }
}
