//! Error types for the LL layer.
//!
//! Errors at this level are transport-focused. Nothing here knows what a
//! record is; malformed buffers and parse failures belong in higher layers.

use thiserror::Error;

/// Errors raised by a text device.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Generic I/O or transport failure.
    ///
    /// Use this for file I/O errors, host API failures, IPC failures, etc.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The operation is not supported by this device.
    ///
    /// For example, appending to a read-only surface.
    #[error("operation not supported: {operation}")]
    NotSupported { operation: &'static str },

    /// A shared device handle was poisoned by a panicking holder.
    #[error("device lock poisoned")]
    LockPoisoned,
}

impl From<std::io::Error> for DeviceError {
    fn from(e: std::io::Error) -> Self {
        DeviceError::Transport(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display_works() {
        let e = DeviceError::NotSupported {
            operation: "append_text",
        };
        assert_eq!(format!("{}", e), "operation not supported: append_text");

        assert_eq!(format!("{}", DeviceError::LockPoisoned), "device lock poisoned");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeviceError = io_err.into();
        assert!(matches!(err, DeviceError::Transport(_)));
        assert!(format!("{}", err).contains("file not found"));
        assert!(StdError::source(&err).is_some());
    }
}
