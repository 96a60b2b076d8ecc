//! Simulation time with femtosecond precision and duration parsing.
//!
//! [`SimTime`] is the only notion of time in the workspace. The encoder is
//! combinational and never sees it; the bench uses it to space stimulus and
//! sampling points and to timestamp waveform output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Femtoseconds per picosecond.
pub const FS_PER_PS: u64 = 1_000;
/// Femtoseconds per nanosecond.
pub const FS_PER_NS: u64 = 1_000_000;
/// Femtoseconds per microsecond.
pub const FS_PER_US: u64 = 1_000_000_000;
/// Femtoseconds per millisecond.
pub const FS_PER_MS: u64 = 1_000_000_000_000;
/// Femtoseconds per second.
pub const FS_PER_S: u64 = 1_000_000_000_000_000;

/// A point in (or span of) simulation time, in femtoseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime {
    /// Simulation time in femtoseconds.
    pub fs: u64,
}

impl SimTime {
    /// Time zero.
    pub fn zero() -> Self {
        Self { fs: 0 }
    }

    /// Creates a time from a nanosecond value.
    pub fn from_ns(ns: u64) -> Self {
        Self { fs: ns * FS_PER_NS }
    }

    /// Creates a time from a picosecond value.
    pub fn from_ps(ps: u64) -> Self {
        Self { fs: ps * FS_PER_PS }
    }

    /// Creates a time from a femtosecond value.
    pub fn from_fs(fs: u64) -> Self {
        Self { fs }
    }

    /// Returns this time advanced by `delay`, saturating at `u64::MAX` fs.
    pub fn advance(self, delay: SimTime) -> Self {
        Self {
            fs: self.fs.saturating_add(delay.fs),
        }
    }

    /// Converts to nanoseconds (truncated).
    pub fn to_ns(self) -> u64 {
        self.fs / FS_PER_NS
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fs = self.fs;
        if fs == 0 {
            write!(f, "0 fs")
        } else if fs % FS_PER_S == 0 {
            write!(f, "{} s", fs / FS_PER_S)
        } else if fs % FS_PER_MS == 0 {
            write!(f, "{} ms", fs / FS_PER_MS)
        } else if fs % FS_PER_US == 0 {
            write!(f, "{} us", fs / FS_PER_US)
        } else if fs % FS_PER_NS == 0 {
            write!(f, "{} ns", fs / FS_PER_NS)
        } else if fs % FS_PER_PS == 0 {
            write!(f, "{} ps", fs / FS_PER_PS)
        } else {
            write!(f, "{fs} fs")
        }
    }
}

/// Error type for parsing duration strings such as `"10ns"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDurationError {
    /// The string was empty or all whitespace.
    #[error("empty duration string")]
    Empty,
    /// No digits precede the unit.
    #[error("invalid duration: no numeric value in '{0}'")]
    NoNumber(String),
    /// The number does not fit in 64 bits once scaled to femtoseconds.
    #[error("duration '{0}' is out of range")]
    OutOfRange(String),
    /// The digits are not followed by a unit.
    #[error("missing unit in duration '{0}' (use fs, ps, ns, us, ms, or s)")]
    MissingUnit(String),
    /// The unit is not one of the supported suffixes.
    #[error("unknown duration unit '{0}' (use fs, ps, ns, us, ms, or s)")]
    UnknownUnit(String),
}

impl FromStr for SimTime {
    type Err = ParseDurationError;

    /// Parses strings like `"10ns"`, `"250 ps"`, `"1us"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDurationError::Empty);
        }

        let digit_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digit_end == 0 {
            return Err(ParseDurationError::NoNumber(s.to_string()));
        }

        let number: u64 = s[..digit_end]
            .parse()
            .map_err(|_| ParseDurationError::OutOfRange(s.to_string()))?;

        let multiplier = match s[digit_end..].trim() {
            "fs" => 1,
            "ps" => FS_PER_PS,
            "ns" => FS_PER_NS,
            "us" => FS_PER_US,
            "ms" => FS_PER_MS,
            "s" => FS_PER_S,
            "" => return Err(ParseDurationError::MissingUnit(s.to_string())),
            unit => return Err(ParseDurationError::UnknownUnit(unit.to_string())),
        };

        number
            .checked_mul(multiplier)
            .map(SimTime::from_fs)
            .ok_or_else(|| ParseDurationError::OutOfRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(SimTime::from_ns(10).fs, 10 * FS_PER_NS);
        assert_eq!(SimTime::from_ps(3).fs, 3 * FS_PER_PS);
        assert_eq!(SimTime::zero(), SimTime::default());
    }

    #[test]
    fn advance_accumulates() {
        let t = SimTime::zero()
            .advance(SimTime::from_ns(10))
            .advance(SimTime::from_ns(10));
        assert_eq!(t, SimTime::from_ns(20));
        assert_eq!(t.to_ns(), 20);
    }

    #[test]
    fn advance_saturates() {
        let t = SimTime::from_fs(u64::MAX).advance(SimTime::from_fs(1));
        assert_eq!(t.fs, u64::MAX);
    }

    #[test]
    fn display_picks_largest_exact_unit() {
        assert_eq!(SimTime::zero().to_string(), "0 fs");
        assert_eq!(SimTime::from_ns(10).to_string(), "10 ns");
        assert_eq!(SimTime::from_ns(1500).to_string(), "1500 ns");
        assert_eq!(SimTime::from_ns(2000).to_string(), "2 us");
        assert_eq!(SimTime::from_ps(250).to_string(), "250 ps");
        assert_eq!(SimTime::from_fs(7).to_string(), "7 fs");
    }

    #[test]
    fn parse_units() {
        assert_eq!("10ns".parse::<SimTime>().unwrap(), SimTime::from_ns(10));
        assert_eq!("250ps".parse::<SimTime>().unwrap(), SimTime::from_ps(250));
        assert_eq!("5us".parse::<SimTime>().unwrap().fs, 5 * FS_PER_US);
        assert_eq!("1ms".parse::<SimTime>().unwrap().fs, FS_PER_MS);
        assert_eq!("1s".parse::<SimTime>().unwrap().fs, FS_PER_S);
        assert_eq!("42fs".parse::<SimTime>().unwrap().fs, 42);
        assert_eq!("0ns".parse::<SimTime>().unwrap(), SimTime::zero());
    }

    #[test]
    fn parse_with_whitespace() {
        assert_eq!("  50 ns ".parse::<SimTime>().unwrap(), SimTime::from_ns(50));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<SimTime>(), Err(ParseDurationError::Empty));
        assert!(matches!(
            "ns".parse::<SimTime>(),
            Err(ParseDurationError::NoNumber(_))
        ));
        assert!(matches!(
            "100".parse::<SimTime>(),
            Err(ParseDurationError::MissingUnit(_))
        ));
        assert!(matches!(
            "100xyz".parse::<SimTime>(),
            Err(ParseDurationError::UnknownUnit(_))
        ));
        assert!(matches!(
            "100000s".parse::<SimTime>(),
            Err(ParseDurationError::OutOfRange(_))
        ));
    }

    #[test]
    fn error_display() {
        let err = "100xyz".parse::<SimTime>().unwrap_err();
        assert!(err.to_string().contains("unknown duration unit 'xyz'"));
    }
}
