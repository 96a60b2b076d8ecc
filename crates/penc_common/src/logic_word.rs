//! Fixed-width words of 4-state logic values stored as two bit planes.

use crate::logic::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The widest word a [`LogicWord`] can hold.
pub const MAX_WIDTH: u32 = 64;

/// A word of up to 64 four-state [`Logic`] values.
///
/// Storage is split into a `value` plane and an `unknown` plane, one bit of
/// each per logic value:
///
/// ```text
/// unknown value  state
///    0      0    0
///    0      1    1
///    1      0    X
///    1      1    Z
/// ```
///
/// Bits at or above `width` are kept zero in both planes, so two words with
/// the same logic contents always compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLogicWord")]
pub struct LogicWord {
    width: u32,
    value: u64,
    unknown: u64,
}

/// Serialized form of a [`LogicWord`], checked before it becomes one.
#[derive(Deserialize)]
struct RawLogicWord {
    width: u32,
    value: u64,
    unknown: u64,
}

/// A deserialized word that breaks the [`LogicWord`] invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWordError {
    /// The width is zero or above [`MAX_WIDTH`].
    #[error("width {0} outside 1..={MAX_WIDTH}")]
    Width(u32),
    /// A value or unknown bit is set at or above the width.
    #[error("bits set above width {0}")]
    StrayBits(u32),
}

impl TryFrom<RawLogicWord> for LogicWord {
    type Error = InvalidWordError;

    fn try_from(raw: RawLogicWord) -> Result<Self, Self::Error> {
        if !(1..=MAX_WIDTH).contains(&raw.width) {
            return Err(InvalidWordError::Width(raw.width));
        }
        let mask = width_mask(raw.width);
        if (raw.value | raw.unknown) & !mask != 0 {
            return Err(InvalidWordError::StrayBits(raw.width));
        }
        Ok(Self {
            width: raw.width,
            value: raw.value,
            unknown: raw.unknown,
        })
    }
}

impl LogicWord {
    /// Creates a word of the given width with every bit `Zero`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or greater than [`MAX_WIDTH`].
    pub fn new(width: u32) -> Self {
        assert!(
            (1..=MAX_WIDTH).contains(&width),
            "width {width} outside 1..={MAX_WIDTH}"
        );
        Self {
            width,
            value: 0,
            unknown: 0,
        }
    }

    /// Returns the number of logic values in this word.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Creates a word with every bit `Zero`.
    pub fn all_zero(width: u32) -> Self {
        Self::new(width)
    }

    /// Creates a word with every bit `X`.
    pub fn all_x(width: u32) -> Self {
        let mut w = Self::new(width);
        w.unknown = width_mask(width);
        w
    }

    /// Creates a fully defined word from the low `width` bits of `value`.
    pub fn from_u64(value: u64, width: u32) -> Self {
        let mut w = Self::new(width);
        w.value = value & width_mask(width);
        w
    }

    /// Creates a word from raw bit planes. Bits above `width` are discarded.
    pub fn from_planes(value: u64, unknown: u64, width: u32) -> Self {
        let mut w = Self::new(width);
        let mask = width_mask(width);
        w.value = value & mask;
        w.unknown = unknown & mask;
        w
    }

    /// Returns the raw value plane.
    pub fn value_bits(&self) -> u64 {
        self.value
    }

    /// Returns the raw unknown plane; a set bit marks an `X` or `Z`.
    pub fn unknown_mask(&self) -> u64 {
        self.unknown
    }

    /// Gets the logic value at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn get(&self, index: u32) -> Logic {
        assert!(
            index < self.width,
            "index {index} out of bounds for width {}",
            self.width
        );
        let v = (self.value >> index) & 1 != 0;
        let u = (self.unknown >> index) & 1 != 0;
        match (u, v) {
            (false, false) => Logic::Zero,
            (false, true) => Logic::One,
            (true, false) => Logic::X,
            (true, true) => Logic::Z,
        }
    }

    /// Sets the logic value at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn set(&mut self, index: u32, logic: Logic) {
        assert!(
            index < self.width,
            "index {index} out of bounds for width {}",
            self.width
        );
        let bit = 1u64 << index;
        let (u, v) = match logic {
            Logic::Zero => (false, false),
            Logic::One => (false, true),
            Logic::X => (true, false),
            Logic::Z => (true, true),
        };
        self.value = if v { self.value | bit } else { self.value & !bit };
        self.unknown = if u {
            self.unknown | bit
        } else {
            self.unknown & !bit
        };
    }

    /// Returns `true` when no bit is `X` or `Z`.
    pub fn is_resolvable(&self) -> bool {
        self.unknown == 0
    }

    /// Returns `true` when every bit is `X`.
    pub fn is_all_x(&self) -> bool {
        self.unknown == width_mask(self.width) && self.value == 0
    }

    /// Converts the word to an integer if every bit is defined.
    ///
    /// Returns `None` if the word contains X or Z values.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_resolvable() {
            Some(self.value)
        } else {
            None
        }
    }

    /// Concatenates `high` above `low`, so bit 0 of the result is bit 0 of `low`.
    ///
    /// Returns `None` if the combined width exceeds [`MAX_WIDTH`].
    pub fn concat(high: &Self, low: &Self) -> Option<Self> {
        let width = high.width + low.width;
        if width > MAX_WIDTH {
            return None;
        }
        Some(Self {
            width,
            value: (high.value << low.width) | low.value,
            unknown: (high.unknown << low.width) | low.unknown,
        })
    }

    /// Extracts `width` bits starting at bit `lsb`.
    ///
    /// # Panics
    ///
    /// Panics if the range runs past the end of the word.
    pub fn slice(&self, lsb: u32, width: u32) -> Self {
        assert!(
            lsb + width <= self.width,
            "slice [{}:{lsb}] out of bounds for width {}",
            lsb + width - 1,
            self.width
        );
        Self::from_planes(self.value >> lsb, self.unknown >> lsb, width)
    }

    /// Parses a binary string like `"10xz"` into a word.
    ///
    /// The leftmost character is the most significant bit. Underscores are
    /// ignored as digit separators. Returns `None` if the string contains
    /// invalid characters or has no digits or more than [`MAX_WIDTH`] digits.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let digits: Vec<char> = s.chars().filter(|&c| c != '_').collect();
        let width = u32::try_from(digits.len()).ok()?;
        if width == 0 || width > MAX_WIDTH {
            return None;
        }
        let mut w = Self::new(width);
        for (i, c) in digits.iter().rev().enumerate() {
            w.set(i as u32, Logic::from_char(*c)?);
        }
        Some(w)
    }
}

impl fmt::Display for LogicWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.width).rev() {
            write!(f, "{}", self.get(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicWord({}'b{self})", self.width)
    }
}

/// Returns a mask with the low `width` bits set.
fn width_mask(width: u32) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
