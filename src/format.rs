//! Output format types for the chatcount library.
//!
//! These types don't depend on CLI frameworks, so library users can pick a
//! report format without pulling in `clap`.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatcount::Result<()> {
//! use chatcount::core::Report;
//! use chatcount::format::{OutputFormat, to_format_string};
//!
//! let counts = chatcount::aggregate("12/05/23, 10:00 - Alice: hi", None, None, None)?;
//! let report = Report::from_counts(&counts);
//!
//! let csv = to_format_string(&report, OutputFormat::Csv)?;
//! assert!(csv.starts_with("Rank;Sender"));
//!
//! // Or detect the format from an output path
//! let format = OutputFormat::from_path("counts.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # example().unwrap();
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::Report;
use crate::error::ChatCountError;

/// Output format for a sender report.
///
/// - [`Table`](OutputFormat::Table) - aligned plain text for terminals
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited rows for spreadsheets
/// - [`Json`](OutputFormat::Json) - structured object for other programs
///
/// # Example
///
/// ```rust
/// use chatcount::format::OutputFormat;
///
/// let format = OutputFormat::from_path("out/counts.json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text table (default)
    #[default]
    Table,

    /// CSV with semicolon delimiter
    Csv,

    /// Pretty-printed JSON object
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatcount::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Table.extension(), "txt");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json]
    }

    /// Detects format from a file path based on extension.
    ///
    /// Matching is case-insensitive. `.txt` maps to [`Table`](OutputFormat::Table).
    pub fn from_path(path: &str) -> Result<Self, ChatCountError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self::all()
            .iter()
            .copied()
            .find(|format| format.extension() == ext)
            .ok_or_else(|| {
                ChatCountError::invalid_format(format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, csv, json",
                    ext
                ))
            })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "Table"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Converts a report to a string in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled,
/// or if serialization fails.
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String, ChatCountError> {
    match format {
        OutputFormat::Table => Ok(report.to_string()),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    report: &Report,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatCountError> {
    match format {
        OutputFormat::Table => Ok(fs::write(path, report.to_string())?),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatCountError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json => "json-output",
        OutputFormat::Table => "default",
    };
    ChatCountError::invalid_format(format!(
        "Output format {:?} requires the '{}' feature to be enabled",
        format, feature
    ))
}
