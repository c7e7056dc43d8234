//! Error types for the Core layer.

use crate::format::DataType;

/// Errors at the Core layer.
///
/// Precondition violations at encode time are hard failures. Decode failures
/// and malformed buffers are reported here too, but the typed accessors turn
/// them into absence before they reach application code.
#[derive(Debug)]
pub enum Error {
    /// Identifier is wider than the fixed id width.
    IdentifierTooLong { id: String, width: usize },

    /// Identifier contains the record terminator.
    IdentifierContainsTerminator { id: String },

    /// Payload contains the record terminator.
    PayloadContainsTerminator { data_type: DataType },

    /// A located payload could not be decoded as its tagged type.
    Parse {
        data_type: DataType,
        payload: String,
        message: String,
    },

    /// The buffer does not follow the record grammar at `offset`.
    Malformed { offset: usize, message: String },

    /// Invalid configuration.
    Config { message: String },

    /// Error from the device layer.
    Device(textbus_ll_store::DeviceError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IdentifierTooLong { id, width } => {
                write!(
                    f,
                    "identifier '{}' is {} characters wide, limit is {}",
                    id,
                    id.chars().count(),
                    width
                )
            }
            Error::IdentifierContainsTerminator { id } => {
                write!(f, "identifier {:?} contains the record terminator", id)
            }
            Error::PayloadContainsTerminator { data_type } => {
                write!(f, "{} payload contains the record terminator", data_type)
            }
            Error::Parse {
                data_type,
                payload,
                message,
            } => write!(
                f,
                "cannot decode {:?} as {}: {}",
                payload, data_type, message
            ),
            Error::Malformed { offset, message } => {
                write!(f, "malformed buffer at offset {}: {}", offset, message)
            }
            Error::Config { message } => write!(f, "invalid configuration: {}", message),
            Error::Device(e) => write!(f, "device error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Device(e) => Some(e),
            _ => None,
        }
    }
}

impl From<textbus_ll_store::DeviceError> for Error {
    fn from(e: textbus_ll_store::DeviceError) -> Self {
        Error::Device(e)
    }
}
