//! Error types for vehicle construction and interactive reading.
//!
//! The `Display` text of every recoverable [`ReadError`] is exactly the line
//! [`VehicleReader`](crate::reader::VehicleReader) writes back to the user.

use thiserror::Error;

use crate::params::*;
use crate::vehicle::VehicleKind;

/// Result type alias for reader operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Rejection of a vehicle at construction time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleError {
    #[error("{}", .kind.non_positive_msg())]
    NonPositiveParameter { kind: VehicleKind },
}

/// Errors that can occur while reading a vehicle from line input.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{}", INVALID_TYPE_MSG)]
    InvalidType { token: String },

    #[error("{}", NON_INTEGER_MSG)]
    NonIntegerField { field: &'static str, token: String },

    #[error("{0}.{suffix}", suffix = RETRY_SUFFIX)]
    NonPositiveParameter(#[from] VehicleError),

    #[error("Input exhausted before a valid vehicle was specified")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Whether the reader handles this error itself by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidType { .. } | Self::NonIntegerField { .. } | Self::NonPositiveParameter(_)
        )
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        let err = ReadError::InvalidType {
            token: "fcev".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid vehicle type. Ice or ev only, please."
        );

        let err = ReadError::NonIntegerField {
            field: "year",
            token: "ice".into(),
        };
        assert_eq!(
            err.to_string(),
            "Non-integer value provided for integer field. Please try again."
        );

        let err = ReadError::from(VehicleError::NonPositiveParameter {
            kind: VehicleKind::Combustion,
        });
        assert_eq!(
            err.to_string(),
            "Fuel tank capacity and fuel consumption must both be positive. Please try again."
        );
        let err = ReadError::from(VehicleError::NonPositiveParameter {
            kind: VehicleKind::Electric,
        });
        assert_eq!(
            err.to_string(),
            "Battery capacity and energy consumption must both be positive. Please try again."
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(ReadError::InvalidType { token: "".into() }.is_recoverable());
        assert!(ReadError::NonIntegerField {
            field: "capacity",
            token: "1.5".into()
        }
        .is_recoverable());
        assert!(!ReadError::EndOfInput.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ReadError::from(io).is_recoverable());
    }
}
