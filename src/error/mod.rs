// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit-check application.

use thiserror::Error;

/// The main error type for commit-check operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The message does not start with an accepted `prefix: ` sequence.
    #[error("\"{message}\" does not match pattern")]
    InvalidPrefixFormat { message: String },
}

/// Result type alias for commit-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prefix_format_display() {
        let err = CheckError::InvalidPrefixFormat {
            message: "feature: add x".to_string(),
        };
        assert!(err.to_string().contains("feature: add x"));
        assert!(err.to_string().contains("does not match pattern"));
    }
}
