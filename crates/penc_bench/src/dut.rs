//! The device-under-test seam between the bench and a model.

use penc_common::LogicWord;
use penc_encoder::{PortInfo, PriorityEncoder};

use crate::error::BenchError;

/// A device the bench can drive and sample by port name.
pub trait Dut {
    /// Lists the device's ports.
    fn ports(&self) -> &[PortInfo];

    /// Drives a value onto an input port.
    fn set_input(&mut self, port: &str, value: LogicWord) -> Result<(), BenchError>;

    /// Samples the current value of a port.
    fn sample(&self, port: &str) -> Result<LogicWord, BenchError>;
}

impl Dut for PriorityEncoder {
    fn ports(&self) -> &[PortInfo] {
        PriorityEncoder::ports(self)
    }

    fn set_input(&mut self, port: &str, value: LogicWord) -> Result<(), BenchError> {
        Ok(self.drive(port, value)?)
    }

    fn sample(&self, port: &str) -> Result<LogicWord, BenchError> {
        Ok(self.read(port)?)
    }
}
