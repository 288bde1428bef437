// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for floor plan reading and reporting

use thiserror::Error;

/// Result type alias for floor plan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or reporting a floor plan
///
/// Malformed input is not an error: it ends the read loops.
#[derive(Error, Debug)]
pub enum Error {
    /// Room type code has no entry in the room name table
    #[error("Invalid category {code} for room {room} in apartment {apartment}")]
    InvalidCategory { apartment: i32, room: i32, code: i32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new invalid category error
    pub fn invalid_category(apartment: i32, room: i32, code: i32) -> Self {
        Error::InvalidCategory {
            apartment,
            room,
            code,
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_message() {
        let err = Error::invalid_category(12, 3, 10);
        assert_eq!(
            err.to_string(),
            "Invalid category 10 for room 3 in apartment 12"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
