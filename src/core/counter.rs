//! Per-sender message counting.
//!
//! [`MessageCounter`] walks the chunks of a transcript and counts each one
//! that survives, in order:
//!
//! 1. extraction of the leading date and the `" - name: "` sender
//! 2. the [`DateRange`] bounds
//! 3. the ignore strings (matched against the trimmed sender)
//! 4. the content filter (matched against the whole chunk)
//!
//! Skipped chunks are not errors; they are logged at `trace` level and
//! tallied in [`CountStats`].
//!
//! # Example
//!
//! ```rust
//! use chatcount::config::CounterConfig;
//! use chatcount::core::{DateRange, MessageCounter};
//!
//! let text = "12/05/23, 10:00 - Alice: hi\nhow are you\n12/05/23, 10:05 - Bob: good";
//!
//! let counter = MessageCounter::new(&CounterConfig::default())?;
//! let (counts, stats) = counter.count_with_stats(text, &DateRange::new());
//!
//! assert_eq!(counts.get("Alice"), Some(1));
//! assert_eq!(counts.get("Bob"), Some(1));
//! assert_eq!(stats.chunks, 2);
//! # Ok::<(), chatcount::ChatCountError>(())
//! ```

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::config::CounterConfig;
use crate::core::filter::DateRange;
use crate::core::models::{CountStats, SenderCounts, SkipReason};
use crate::error::Result;
use crate::parsing::{chunks, parse_chunk};

/// Compiled counting rules.
///
/// Immutable once built; one counter can be shared between threads and
/// reused for any number of transcripts.
#[derive(Debug, Clone)]
pub struct MessageCounter {
    ignore_strings: Vec<String>,
    filter: Option<Regex>,
}

impl MessageCounter {
    /// Compiles a counter from a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`ChatCountError::Pattern`](crate::ChatCountError::Pattern) if
    /// the filter pattern is not a valid regular expression. The pattern is
    /// checked here, whether or not any chunk later reaches the filter.
    pub fn new(config: &CounterConfig) -> Result<Self> {
        let filter = match config.filter_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => Some(
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()?,
            ),
            _ => None,
        };

        Ok(Self {
            ignore_strings: config.ignore_strings.clone(),
            filter,
        })
    }

    /// Counts messages per sender.
    pub fn count(&self, content: &str, range: &DateRange) -> SenderCounts {
        self.count_with_stats(content, range).0
    }

    /// Counts messages per sender and reports what was skipped.
    pub fn count_with_stats(&self, content: &str, range: &DateRange) -> (SenderCounts, CountStats) {
        let mut counts = SenderCounts::new();
        let mut stats = CountStats::default();

        for chunk in chunks(content) {
            stats.chunks += 1;

            match self.classify(chunk, range) {
                Ok(sender) => {
                    counts.increment(sender);
                    stats.counted += 1;
                }
                Err(reason) => {
                    trace!(reason = reason.as_str(), chunk_len = chunk.len(), "skipping chunk");
                    stats.record_skip(reason);
                }
            }
        }

        debug!(
            chunks = stats.chunks,
            counted = stats.counted,
            skipped = stats.skipped(),
            senders = counts.len(),
            "counted transcript"
        );

        (counts, stats)
    }

    /// Returns `true` if `sender` contains one of the ignore strings.
    pub fn is_ignored(&self, sender: &str) -> bool {
        self.ignore_strings
            .iter()
            .any(|ignore| sender.contains(ignore.as_str()))
    }

    /// Returns `true` if a content filter is active.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    fn classify<'a>(&self, chunk: &'a str, range: &DateRange) -> std::result::Result<&'a str, SkipReason> {
        let msg = parse_chunk(chunk).ok_or(SkipReason::Malformed)?;

        range.check(msg.date)?;

        if self.is_ignored(msg.sender) {
            return Err(SkipReason::IgnoredSender);
        }

        if let Some(filter) = &self.filter {
            if !filter.is_match(msg.raw) {
                return Err(SkipReason::FilteredOut);
            }
        }

        Ok(msg.sender)
    }
}

/// Counts messages per sender with the default ignore strings.
///
/// `min_date` and `max_date` are inclusive calendar-day bounds; `None` leaves
/// that side open. `filter` is a case-insensitive regular expression tested
/// against each whole message (header and continuation lines); `None` or an
/// empty string disables it.
///
/// The transcript is not validated here; call
/// [`validate`](crate::validator::validate) first.
///
/// # Errors
///
/// Returns [`ChatCountError::Pattern`](crate::ChatCountError::Pattern) if
/// `filter` is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use chatcount::aggregate;
/// use chrono::NaiveDate;
///
/// let text = "12/05/23, 10:00 - Alice: hi\n14/05/23, 10:00 - Bob: hello";
/// let min = NaiveDate::from_ymd_opt(2023, 5, 13);
///
/// let counts = aggregate(text, min, None, None)?;
/// assert_eq!(counts.get("Alice"), None);
/// assert_eq!(counts.get("Bob"), Some(1));
/// # Ok::<(), chatcount::ChatCountError>(())
/// ```
pub fn aggregate(
    content: &str,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    filter: Option<&str>,
) -> Result<SenderCounts> {
    let mut config = CounterConfig::default();
    if let Some(pattern) = filter {
        config = config.with_filter(pattern);
    }

    let counter = MessageCounter::new(&config)?;
    Ok(counter.count(content, &DateRange::between(min_date, max_date)))
}
