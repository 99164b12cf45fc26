//! Report writers.
//!
//! This module provides writers for a ranked [`Report`](crate::core::Report):
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty-printed JSON object - requires `json-output` feature
//!
//! The plain-text table needs no feature; it is the report's `Display` output.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatcount::Result<()> {
//! use chatcount::core::Report;
//! use chatcount::core::output::{to_csv, write_json};
//!
//! let counts = chatcount::aggregate("12/05/23, 10:00 - Alice: hi", None, None, None)?;
//! let report = Report::from_counts(&counts);
//!
//! write_json(&report, "counts.json")?;
//! let csv_string = to_csv(&report)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
