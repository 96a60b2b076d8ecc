//! Exhaustive parallel check of an encoder against a bit-by-bit reference.
//!
//! The sweep covers every resolved 16-bit word plus every word with exactly
//! one undefined bit (each position, each pattern of the other 15 bits, both
//! `X` and `Z`). Cases are numbered so the whole space is one `rayon` range.

use penc_common::Logic;
use penc_encoder::{encode, InputWord, OutputWord, INPUT_WIDTH};
use rayon::prelude::*;
use serde::Serialize;

/// How many mismatches a [`SweepReport`] keeps in detail.
pub const MAX_REPORTED_MISMATCHES: usize = 16;

const RESOLVED_CASES: u32 = 1 << INPUT_WIDTH;
// position (16) x other bits (2^15) x {X, Z}
const UNDEFINED_CASES: u32 = INPUT_WIDTH * (1 << (INPUT_WIDTH - 1)) * 2;
const TOTAL_CASES: u32 = RESOLVED_CASES + UNDEFINED_CASES;

/// One input where the encoder disagreed with the reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SweepMismatch {
    /// The 16-bit input, most significant bit first.
    pub input: String,
    /// Reference output.
    pub expected: String,
    /// Encoder output.
    pub observed: String,
}

/// Result of a sweep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Number of inputs checked.
    pub checked: u64,
    /// Number of inputs that disagreed.
    pub mismatch_count: u64,
    /// The first mismatches in case order, at most [`MAX_REPORTED_MISMATCHES`].
    pub mismatches: Vec<SweepMismatch>,
}

impl SweepReport {
    /// Returns `true` when no input disagreed.
    pub fn is_clean(&self) -> bool {
        self.mismatch_count == 0
    }
}

/// Reference encoder: scans from bit 15 down, one logic value at a time.
///
/// Any `X` or `Z` anywhere in the word yields the all-`X` output, even when
/// a defined `1` sits above it.
pub fn reference_encode(input: &InputWord) -> OutputWord {
    let word = input.as_word();
    let bits: Vec<Logic> = (0..word.width()).rev().map(|i| word.get(i)).collect();
    if bits.iter().any(|b| !b.is_defined()) {
        return OutputWord::unresolved();
    }
    match bits.iter().position(|&b| b == Logic::One) {
        Some(pos) => OutputWord::from_u8((INPUT_WIDTH as usize - 1 - pos) as u8),
        None => OutputWord::from_u8(penc_encoder::SENTINEL),
    }
}

/// Sweeps the crate's own [`encode`].
pub fn sweep() -> SweepReport {
    sweep_with(encode)
}

/// Sweeps `encoder` against [`reference_encode`].
pub fn sweep_with<F>(encoder: F) -> SweepReport
where
    F: Fn(&InputWord) -> OutputWord + Sync,
{
    let failing: Vec<u32> = (0..TOTAL_CASES)
        .into_par_iter()
        .filter(|&case| {
            let input = case_input(case);
            encoder(&input) != reference_encode(&input)
        })
        .collect();

    let mismatches = failing
        .iter()
        .take(MAX_REPORTED_MISMATCHES)
        .map(|&case| {
            let input = case_input(case);
            SweepMismatch {
                input: input.as_word().to_string(),
                expected: reference_encode(&input).to_string(),
                observed: encoder(&input).to_string(),
            }
        })
        .collect();

    SweepReport {
        checked: u64::from(TOTAL_CASES),
        mismatch_count: failing.len() as u64,
        mismatches,
    }
}

/// Maps a case number to its input word.
///
/// Cases below 2^16 are the resolved words in order. Above that, bit 0 of
/// the offset picks `X` or `Z`, the next 15 bits are the other bits, and the
/// rest is the undefined bit's position.
fn case_input(case: u32) -> InputWord {
    if case < RESOLVED_CASES {
        return InputWord::from_u16(case as u16);
    }
    let offset = case - RESOLVED_CASES;
    let high_impedance = offset & 1 == 1;
    let pattern = (offset >> 1) & 0x7FFF;
    let bit = 1u32 << (offset >> 16);

    let below = bit - 1;
    let spread = (pattern & below) | ((pattern & !below) << 1);
    let value = if high_impedance { spread | bit } else { spread };
    InputWord::from_planes(value as u16, bit as u16)
}
