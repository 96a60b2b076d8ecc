//! A named-port model of the encoder, as a driver sees it.

use penc_common::LogicWord;
use serde::Serialize;

use crate::encoder::encode;
use crate::error::EncodeError;
use crate::output::OutputWord;
use crate::ports::{InputWord, OUTPUT_WIDTH, PORT_WIDTH};

/// Direction of a device port.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Driven by the environment.
    Input,
    /// Driven by the device.
    Output,
}

/// Static description of one device port.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct PortInfo {
    /// Port name.
    pub name: &'static str,
    /// Port direction.
    pub direction: PortDirection,
    /// Port width in bits.
    pub width: u32,
}

const PORTS: [PortInfo; 3] = [
    PortInfo {
        name: "ui_in",
        direction: PortDirection::Input,
        width: PORT_WIDTH,
    },
    PortInfo {
        name: "uio_in",
        direction: PortDirection::Input,
        width: PORT_WIDTH,
    },
    PortInfo {
        name: "uo_out",
        direction: PortDirection::Output,
        width: OUTPUT_WIDTH,
    },
];

/// The encoder with its two input ports and one output port.
///
/// Only the values currently driven onto the inputs are held; `uo_out` is
/// recomputed from them on every read. Inputs start undriven (all `X`), so
/// the output is unresolved until both ports have been driven.
#[derive(Clone, Debug)]
pub struct PriorityEncoder {
    ui_in: LogicWord,
    uio_in: LogicWord,
}

impl PriorityEncoder {
    /// Creates a device with both inputs undriven.
    pub fn new() -> Self {
        Self {
            ui_in: LogicWord::all_x(PORT_WIDTH),
            uio_in: LogicWord::all_x(PORT_WIDTH),
        }
    }

    /// Returns the device's port list.
    pub fn ports(&self) -> &'static [PortInfo] {
        &PORTS
    }

    /// Drives a value onto an input port.
    pub fn drive(&mut self, port: &str, value: LogicWord) -> Result<(), EncodeError> {
        let info = lookup(port)?;
        if info.direction != PortDirection::Input {
            return Err(EncodeError::NotAnInput(port.to_string()));
        }
        if value.width() != info.width {
            return Err(EncodeError::PortWidth {
                port: port.to_string(),
                expected: info.width,
                actual: value.width(),
            });
        }
        match port {
            "ui_in" => self.ui_in = value,
            _ => self.uio_in = value,
        }
        Ok(())
    }

    /// Reads the current value of any port.
    pub fn read(&self, port: &str) -> Result<LogicWord, EncodeError> {
        match lookup(port)?.name {
            "ui_in" => Ok(self.ui_in),
            "uio_in" => Ok(self.uio_in),
            _ => Ok(*self.uo_out().as_word()),
        }
    }

    /// Returns the encoder output for the currently driven inputs.
    pub fn uo_out(&self) -> OutputWord {
        match InputWord::from_ports(&self.ui_in, &self.uio_in) {
            Ok(word) => encode(&word),
            // Widths are checked in `drive`.
            Err(_) => OutputWord::unresolved(),
        }
    }
}

impl Default for PriorityEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(port: &str) -> Result<&'static PortInfo, EncodeError> {
    PORTS
        .iter()
        .find(|p| p.name == port)
        .ok_or_else(|| EncodeError::UnknownPort(port.to_string()))
}
