//! Shared foundational types for the penc priority encoder workspace.
//!
//! This crate provides four-state logic values, fixed-width logic words with
//! separate value and unknown bit planes, and femtosecond simulation time
//! with duration parsing.

#![warn(missing_docs)]

pub mod logic;
pub mod logic_word;
pub mod time;

pub use logic::Logic;
pub use logic_word::{InvalidWordError, LogicWord, MAX_WIDTH};
pub use time::{ParseDurationError, SimTime};
