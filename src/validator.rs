//! Fast-fail check that a text blob looks like a WhatsApp export.
//!
//! Only the first line is inspected. Run [`validate`] before counting: the
//! counter itself never re-validates and silently skips anything that is not
//! a message.

use serde::{Deserialize, Serialize};

use crate::error::{ChatCountError, Result};
use crate::parsing::is_header_line;

/// Error message for empty input or an empty first line.
pub const EMPTY_CONTENT_ERROR: &str = "Empty file contents.";

/// Error message for a first line that is not a transcript header.
pub const INCORRECT_FORMAT_ERROR: &str = "The file contents are in an incorrect format";

/// Outcome of [`validate`].
///
/// `error` is empty when `is_valid` is `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub error: String,
}

impl Validation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: String::new(),
        }
    }

    fn invalid(error: &str) -> Self {
        Self {
            is_valid: false,
            error: error.to_string(),
        }
    }

    /// Converts an invalid outcome into [`ChatCountError::InvalidFormat`].
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ChatCountError::invalid_format(self.error))
        }
    }
}

/// Checks the first line of `content` against the header shape.
///
/// # Example
///
/// ```rust
/// use chatcount::validator::validate;
///
/// assert!(validate("12/05/23, 10:00 PM - Alice: hi").is_valid);
///
/// let result = validate("");
/// assert!(!result.is_valid);
/// assert_eq!(result.error, "Empty file contents.");
/// ```
pub fn validate(content: &str) -> Validation {
    let first_line = content
        .split_once('\n')
        .map_or(content, |(line, _)| line);

    if first_line.is_empty() {
        return Validation::invalid(EMPTY_CONTENT_ERROR);
    }

    if is_header_line(first_line) {
        Validation::valid()
    } else {
        Validation::invalid(INCORRECT_FORMAT_ERROR)
    }
}

/// Shortcut for `validate(content).into_result()`.
pub fn validate_export(content: &str) -> Result<()> {
    validate(content).into_result()
}
