//! Counting rule configuration.
//!
//! [`CounterConfig`] is the swappable rule set applied to every chunk:
//!
//! - **ignore strings**: a chunk whose sender contains any of these
//!   substrings is a system/event line and is not counted
//! - **filter pattern**: an optional case-insensitive regular expression the
//!   whole chunk must match
//!
//! The date range is kept separately in
//! [`DateRange`](crate::core::filter::DateRange) since it is usually chosen
//! per call, while the rule set tends to stay fixed.
//!
//! # Example
//!
//! ```rust
//! use chatcount::config::CounterConfig;
//! use chatcount::core::MessageCounter;
//!
//! let config = CounterConfig::new()
//!     .with_ignore_string("left")
//!     .with_filter("good (morning|night)");
//!
//! let counter = MessageCounter::new(&config)?;
//! # Ok::<(), chatcount::ChatCountError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Sender substrings ignored by default.
pub const DEFAULT_IGNORE_STRINGS: &[&str] =
    &["created group", "added you to a group in the community"];

/// Rule set for [`MessageCounter`](crate::core::MessageCounter).
///
/// Deserializes with defaults for missing fields, so a config file only needs
/// to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Sender substrings that mark a chunk as a system line (case-sensitive).
    pub ignore_strings: Vec<String>,

    /// Case-insensitive regex tested against the whole chunk (default: none).
    ///
    /// An empty string behaves like `None`.
    pub filter_pattern: Option<String>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            ignore_strings: DEFAULT_IGNORE_STRINGS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            filter_pattern: None,
        }
    }
}

impl CounterConfig {
    /// Creates a new configuration with the default ignore strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one ignore string.
    #[must_use]
    pub fn with_ignore_string(mut self, ignore: impl Into<String>) -> Self {
        self.ignore_strings.push(ignore.into());
        self
    }

    /// Adds several ignore strings.
    #[must_use]
    pub fn with_ignore_strings<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_strings.extend(ignores.into_iter().map(Into::into));
        self
    }

    /// Clears all ignore strings, including the defaults.
    #[must_use]
    pub fn without_ignore_strings(mut self) -> Self {
        self.ignore_strings.clear();
        self
    }

    /// Sets the content filter pattern.
    ///
    /// The pattern is compiled by
    /// [`MessageCounter::new`](crate::core::MessageCounter::new), which is
    /// where syntax errors surface.
    #[must_use]
    pub fn with_filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter_pattern = Some(pattern.into());
        self
    }

    /// Returns `true` if a non-empty filter pattern is set.
    pub fn has_filter(&self) -> bool {
        self.filter_pattern.as_deref().is_some_and(|p| !p.is_empty())
    }
}
