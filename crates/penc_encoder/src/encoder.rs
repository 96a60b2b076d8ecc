//! The priority encoding function.
//!
//! Bits are scanned from 15 down to 0; the first `1` found wins. The scan
//! only runs on a fully resolved word. If any bit is `X` or `Z` the encoder
//! cannot prove that the bits above a `1` are really `0`, so every output
//! bit becomes `X`.

use penc_common::LogicWord;

use crate::error::EncodeError;
use crate::output::{OutputWord, SENTINEL};
use crate::ports::InputWord;

/// Encodes a four-state input word.
///
/// Returns `0000 ‖ i` for the highest set bit `i`, [`SENTINEL`] for an
/// all-zero word, and [`OutputWord::unresolved`] if any bit is undefined.
pub fn encode(word: &InputWord) -> OutputWord {
    match word.to_u16() {
        Some(bits) => OutputWord::from_u8(encode_u16(bits)),
        None => OutputWord::unresolved(),
    }
}

/// Encodes a fully resolved 16-bit word.
pub fn encode_u16(word: u16) -> u8 {
    if word == 0 {
        SENTINEL
    } else {
        (15 - word.leading_zeros()) as u8
    }
}

/// Concatenates `ui_in` (high byte) with `uio_in` (low byte) and encodes.
pub fn encode_ports(ui_in: &LogicWord, uio_in: &LogicWord) -> Result<OutputWord, EncodeError> {
    let word = InputWord::from_ports(ui_in, uio_in)?;
    Ok(encode(&word))
}
