/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types shared by the codec and the structure transformations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, transforming or writing a structure
///
/// Every variant except `MissingFile` and `Io` names the operation that
/// failed so the caller can report it without extra context.
#[derive(Error, Debug)]
pub enum PoscarError {
    /// Malformed or incomplete POSCAR text, or a broken atom-count invariant
    #[error("Format error in {operation}: {reason}")]
    Format {
        operation: &'static str,
        reason: String,
    },

    /// Unknown coordinate-system label or an unsupported conversion
    #[error("Coordinate system error in {operation}: {reason}")]
    CoordinateSystem {
        operation: &'static str,
        reason: String,
    },

    /// Two structures used together do not have the same number of atoms
    #[error("Structures do not correspond in {operation}: {left} atoms vs {right} atoms")]
    Correspondence {
        operation: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),

    /// A numeric argument outside the range an operation can handle
    #[error("Invalid parameter in {operation}: {reason}")]
    InvalidParameter {
        operation: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PoscarError {
    pub(crate) fn format(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Format {
            operation,
            reason: reason.into(),
        }
    }

    pub(crate) fn coordinate_system(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::CoordinateSystem {
            operation,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result type for structure operations
pub type Result<T> = std::result::Result<T, PoscarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operation() {
        let err = PoscarError::format("parse", "missing scale line");
        assert_eq!(err.to_string(), "Format error in parse: missing scale line");

        let err = PoscarError::Correspondence {
            operation: "lerp",
            left: 4,
            right: 5,
        };
        assert_eq!(
            err.to_string(),
            "Structures do not correspond in lerp: 4 atoms vs 5 atoms"
        );

        let err = PoscarError::MissingFile(PathBuf::from("POSCAR"));
        assert_eq!(err.to_string(), "POSCAR not found");
    }
}
