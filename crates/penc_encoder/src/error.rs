//! Error types for the encoder's port boundary.

/// Errors raised when values are presented to the encoder's ports.
///
/// The encoding itself never fails; these only guard the shape of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A port value does not have the port's width.
    #[error("port '{port}' is {expected} bits wide, got a {actual}-bit value")]
    PortWidth {
        /// The port name.
        port: String,
        /// The port's width.
        expected: u32,
        /// The width of the value supplied.
        actual: u32,
    },

    /// The named port does not exist on the device.
    #[error("unknown port '{0}'")]
    UnknownPort(String),

    /// The named port exists but cannot be driven from outside.
    #[error("port '{0}' is an output and cannot be driven")]
    NotAnInput(String),
}
