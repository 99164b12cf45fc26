//! # Chatcount
//!
//! A Rust library for counting messages per sender in WhatsApp plain-text
//! chat exports.
//!
//! ## Overview
//!
//! A WhatsApp export is a sequence of messages, each starting with a header
//! like `12/05/23, 10:00 - Alice: ` (24-hour) or `12/05/23, 1:07 pm - Bob: `
//! (12-hour). Bodies may span several lines. Chatcount:
//! - checks that a transcript looks like an export ([`validate`])
//! - splits it into one chunk per message, wherever headers appear
//! - tallies messages per sender, optionally restricted to a date range,
//!   excluding system senders and keeping only messages matching a filter
//!
//! ## Quick Start
//!
//! ```rust
//! use chatcount::prelude::*;
//!
//! let transcript = "\
//! 12/05/23, 10:00 - Alice: hello
//! 12/05/23, 10:01 - Bob: hi there
//! 12/05/23, 10:02 - Alice: how are you";
//!
//! assert!(validate(transcript).is_valid);
//!
//! let counts = aggregate(transcript, None, None, None)?;
//! assert_eq!(counts.get("Alice"), Some(2));
//! assert_eq!(counts.get("Bob"), Some(1));
//! # Ok::<(), ChatCountError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`validator`] - Export format check ([`validate`], [`Validation`])
//! - [`parsing`] - Header patterns, chunk segmentation and date decoding
//! - [`config`] - Ignore strings and filter pattern ([`CounterConfig`])
//! - [`core`] - Counting and reporting
//!   - [`core::counter`] - [`MessageCounter`], [`aggregate`]
//!   - [`core::filter`] - [`DateRange`]
//!   - [`core::models`] - [`SenderCounts`], [`CountStats`](core::CountStats)
//!   - [`core::report`] - [`Report`]
//!   - [`core::output`] - CSV and JSON writers
//! - [`format`] - Output format selection
//! - [`error`] - Unified error types ([`ChatCountError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parsing;
pub mod validator;

// Re-export the main types at the crate root for convenience
pub use config::CounterConfig;
pub use core::{DateRange, MessageCounter, Report, SenderCounts, aggregate};
pub use error::{ChatCountError, Result};
pub use validator::{Validation, validate};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatcount::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatCountError, Result};

    // Validation
    pub use crate::validator::{Validation, validate, validate_export};

    // Configuration
    pub use crate::config::CounterConfig;

    // Counting
    pub use crate::core::counter::{MessageCounter, aggregate};
    pub use crate::core::filter::DateRange;
    pub use crate::core::models::{CountStats, SenderCounts, SkipReason};

    // Reporting
    pub use crate::core::report::{Report, ReportRow};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
