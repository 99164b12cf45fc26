//! Unified error types for chatcount.
//!
//! This module provides a single [`ChatCountError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get the exact message the validator produced
//! - **Developers** get source error chains for debugging
//!
//! Chunks that are skipped during counting (malformed lines, out-of-range
//! dates, ignored senders, non-matching filter) are **not** errors. They are
//! tallied in [`CountStats`](crate::core::CountStats) instead.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatcount operations.
///
/// # Example
///
/// ```rust
/// use chatcount::error::Result;
/// use chatcount::SenderCounts;
///
/// fn my_function() -> Result<SenderCounts> {
///     chatcount::aggregate("12/05/23, 10:00 - Alice: hi", None, None, None)
/// }
/// # assert_eq!(my_function().unwrap().get("Alice"), Some(1));
/// ```
pub type Result<T> = std::result::Result<T, ChatCountError>;

/// The error type for all chatcount operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatCountError {
    /// The transcript does not look like a chat export.
    ///
    /// Produced by [`Validation::into_result`](crate::validator::Validation::into_result)
    /// when the file is empty or its first line is not a message header.
    /// The display output is the validator message itself so it can be shown
    /// to users as-is.
    #[error("{message}")]
    InvalidFormat {
        /// User-facing description of what's wrong
        message: String,
    },

    /// The content filter is not a valid regular expression.
    ///
    /// This fails the whole counting call; no partial result is produced.
    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid date in a date-range bound.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An I/O error occurred while reading a transcript or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output was produced as bytes that are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatCountError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatCountError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatCountError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatCountError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatCountError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD or DD/MM/YY",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatCountError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatCountError::InvalidFormat { .. })
    }

    /// Returns `true` if the filter pattern failed to compile.
    pub fn is_pattern(&self) -> bool {
        matches!(self, ChatCountError::Pattern(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatCountError::InvalidDate { .. })
    }
}
