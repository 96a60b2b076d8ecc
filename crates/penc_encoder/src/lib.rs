//! Combinational priority encoder for a 16-bit word built from two 8-bit ports.
//!
//! The encoder reports the index of the most significant set bit of the word
//! in the low nibble of an 8-bit output, with a status nibble of `0000`. An
//! all-zero word produces the sentinel `1111_0000`. Any undefined (`X` or `Z`)
//! input bit makes every output bit `X`.
//!
//! # Usage
//!
//! ```
//! use penc_common::LogicWord;
//! use penc_encoder::{encode_ports, Encoding};
//!
//! let ui_in = LogicWord::from_u64(0b0001_0000, 8);
//! let uio_in = LogicWord::from_u64(0b0001_0000, 8);
//! let out = encode_ports(&ui_in, &uio_in).unwrap();
//! assert_eq!(out.to_u8(), Some(0b0000_1100));
//! assert_eq!(out.decode(), Encoding::Index(12));
//! ```
//!
//! # Modules
//!
//! - `ports`: port widths and the concatenated [`InputWord`]
//! - `encoder`: the encoding function and its two-state fast path
//! - `output`: the 8-bit [`OutputWord`] and its decoded [`Encoding`]
//! - `device`: [`PriorityEncoder`], a named-port device model
//! - `error`: [`EncodeError`]

#![warn(missing_docs)]

pub mod device;
pub mod encoder;
pub mod error;
pub mod output;
pub mod ports;

pub use device::{PortDirection, PortInfo, PriorityEncoder};
pub use encoder::{encode, encode_ports, encode_u16};
pub use error::EncodeError;
pub use output::{Encoding, OutputWord, NONE_SET_STATUS, SENTINEL};
pub use ports::{InputWord, INPUT_WIDTH, OUTPUT_WIDTH, PORT_WIDTH};
