//! Result types produced by a counting pass.
//!
//! - [`SenderCounts`] - sender name to message count
//! - [`CountStats`] - how many chunks were seen, counted and skipped
//! - [`SkipReason`] - why a chunk was not counted

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

/// Mapping from sender name to number of counted messages.
///
/// Keys are the trimmed sender names exactly as they appear in the
/// transcript (case-sensitive). A sender only appears once at least one of
/// their messages was counted.
///
/// Serializes as a plain JSON object.
///
/// # Example
///
/// ```rust
/// use chatcount::SenderCounts;
///
/// let mut counts = SenderCounts::new();
/// counts.increment("Alice");
/// counts.increment("Alice");
/// counts.increment("Bob");
///
/// assert_eq!(counts.get("Alice"), Some(2));
/// assert_eq!(counts.get("alice"), None);
/// assert_eq!(counts.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderCounts(HashMap<String, usize>);

impl SenderCounts {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one message for `sender`, creating the entry at zero if absent.
    pub fn increment(&mut self, sender: &str) {
        if let Some(count) = self.0.get_mut(sender) {
            *count += 1;
        } else {
            self.0.insert(sender.to_string(), 1);
        }
    }

    /// Returns the count for `sender`, if any message of theirs was counted.
    pub fn get(&self, sender: &str) -> Option<usize> {
        self.0.get(sender).copied()
    }

    /// Number of distinct senders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Iterates over `(sender, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(sender, count)| (sender.as_str(), *count))
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying map.
    pub fn into_inner(self) -> HashMap<String, usize> {
        self.0
    }
}

impl From<SenderCounts> for HashMap<String, usize> {
    fn from(counts: SenderCounts) -> Self {
        counts.0
    }
}

impl From<HashMap<String, usize>> for SenderCounts {
    fn from(map: HashMap<String, usize>) -> Self {
        Self(map)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for SenderCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, c)| (s.into(), c)).collect())
    }
}

impl IntoIterator for SenderCounts {
    type Item = (String, usize);
    type IntoIter = hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Why a chunk was left out of the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No leading date or no `" - name: "` part (preamble, stray text).
    Malformed,
    /// Dated before the lower bound.
    BeforeMinDate,
    /// Dated after the upper bound.
    AfterMaxDate,
    /// Sender contains an ignore string.
    IgnoredSender,
    /// Chunk does not match the content filter.
    FilteredOut,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Malformed => "malformed",
            SkipReason::BeforeMinDate => "before_min_date",
            SkipReason::AfterMaxDate => "after_max_date",
            SkipReason::IgnoredSender => "ignored_sender",
            SkipReason::FilteredOut => "filtered_out",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chunk accounting for one counting pass.
///
/// `chunks == counted + skipped()` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStats {
    pub chunks: usize,
    pub counted: usize,
    pub malformed: usize,
    pub before_min_date: usize,
    pub after_max_date: usize,
    pub ignored_sender: usize,
    pub filtered_out: usize,
}

impl CountStats {
    /// Total number of chunks that were not counted.
    pub fn skipped(&self) -> usize {
        self.malformed
            + self.before_min_date
            + self.after_max_date
            + self.ignored_sender
            + self.filtered_out
    }

    /// Number of skips for one reason.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::Malformed => self.malformed,
            SkipReason::BeforeMinDate => self.before_min_date,
            SkipReason::AfterMaxDate => self.after_max_date,
            SkipReason::IgnoredSender => self.ignored_sender,
            SkipReason::FilteredOut => self.filtered_out,
        }
    }

    pub(crate) fn record_skip(&mut self, reason: SkipReason) {
        let slot = match reason {
            SkipReason::Malformed => &mut self.malformed,
            SkipReason::BeforeMinDate => &mut self.before_min_date,
            SkipReason::AfterMaxDate => &mut self.after_max_date,
            SkipReason::IgnoredSender => &mut self.ignored_sender,
            SkipReason::FilteredOut => &mut self.filtered_out,
        };
        *slot += 1;
    }
}
