//! Ranked view of a counting result.
//!
//! [`Report`] turns the unordered [`SenderCounts`] into rows sorted by
//! message count (descending), with ties broken by sender name so output is
//! deterministic. Its `Display` impl renders a plain-text table.

use std::fmt;

use serde::Serialize;

use crate::core::models::SenderCounts;

/// One sender's line in a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub sender: String,
    pub count: usize,
    /// Percentage of all counted messages (0-100).
    pub share: f64,
}

/// Sender counts ranked for display or export.
///
/// # Example
///
/// ```rust
/// use chatcount::core::Report;
/// use chatcount::SenderCounts;
///
/// let counts: SenderCounts = [("Bob", 1), ("Alice", 3)].into_iter().collect();
/// let report = Report::from_counts(&counts);
///
/// assert_eq!(report.total, 4);
/// assert_eq!(report.rows[0].sender, "Alice");
/// assert_eq!(report.rows[0].share, 75.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Sum of all counts.
    pub total: usize,
    #[serde(rename = "senders")]
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn from_counts(counts: &SenderCounts) -> Self {
        let total = counts.total();

        let mut ranked: Vec<(&str, usize)> = counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (sender, count))| ReportRow {
                rank: i + 1,
                sender: sender.to_string(),
                count,
                share: share_of(count, total),
            })
            .collect();

        Self { total, rows }
    }

    /// Keeps only the first `n` rows. `total` still covers every sender.
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&SenderCounts> for Report {
    fn from(counts: &SenderCounts) -> Self {
        Self::from_counts(counts)
    }
}

/// Renders the plain-text table for `report`.
///
/// Same as `report.to_string()`.
pub fn render_table(report: &Report) -> String {
    report.to_string()
}

fn share_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No messages counted.");
        }

        let width = self
            .rows
            .iter()
            .map(|row| row.sender.chars().count())
            .max()
            .unwrap_or(0)
            .max("Sender".len());

        writeln!(
            f,
            "{:>4}  {:<width$}  {:>8}  {:>6}",
            "#", "Sender", "Messages", "Share"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>4}  {:<width$}  {:>8}  {:>5.1}%",
                row.rank, row.sender, row.count, row.share
            )?;
        }
        writeln!(f, "{:>4}  {:<width$}  {:>8}", "", "Total", self.total)
    }
}
