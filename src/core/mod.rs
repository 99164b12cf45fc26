//! Core counting logic for chatcount.
//!
//! This module contains:
//! - [`counter`] - Boundary-driven per-sender tallying
//! - [`filter`] - Inclusive date-range bounds
//! - [`models`] - Count map and skip accounting
//! - [`report`] - Ranked view of the counts
//! - [`output`] - Report writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatcount::config::CounterConfig;
//! use chatcount::core::{DateRange, MessageCounter, Report};
//!
//! let counter = MessageCounter::new(&CounterConfig::default())?;
//! let (counts, stats) = counter.count_with_stats(
//!     "12/05/23, 10:00 - Alice: hi\n12/05/23, 10:01 - Bob: yo",
//!     &DateRange::new(),
//! );
//!
//! assert_eq!(stats.counted, 2);
//! assert_eq!(Report::from_counts(&counts).len(), 2);
//! # Ok::<(), chatcount::ChatCountError>(())
//! ```

pub mod counter;
pub mod filter;
pub mod models;
pub mod output;
pub mod report;

pub use counter::{MessageCounter, aggregate};
pub use filter::{DateRange, parse_bound_date};
pub use models::{CountStats, SenderCounts, SkipReason};
pub use report::{Report, ReportRow, render_table};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
