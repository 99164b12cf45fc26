//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args`] also knows how to turn itself into the library's
//! [`DateRange`] and [`CounterConfig`], so `main` stays thin.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::CounterConfig;
use crate::core::filter::DateRange;
use crate::error::ChatCountError;

/// Count messages per sender in a WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcount")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcount chat.txt
    chatcount chat.txt --after 2023-01-01 --before 2023-12-31
    chatcount chat.txt --filter \"good (morning|night)\"
    chatcount chat.txt --ignore Bot -o counts.csv
    chatcount chat.txt --format json --stats")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Count messages on or after this date (YYYY-MM-DD or DD/MM/YY)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Count messages on or before this date (YYYY-MM-DD or DD/MM/YY)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages matching this regular expression (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// Skip senders whose name contains this text (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub ignore: Vec<String>,

    /// Don't skip the built-in system senders
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Output format [default: from the -o extension, else table]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Print chunk statistics to stderr
    #[arg(long)]
    pub stats: bool,
}

impl Args {
    /// Builds the date range from `--after` / `--before`.
    pub fn date_range(&self) -> Result<DateRange, ChatCountError> {
        let mut range = DateRange::new();
        if let Some(ref after) = self.after {
            range = range.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            range = range.with_date_to(before)?;
        }
        Ok(range)
    }

    /// Picks the report format.
    ///
    /// An explicit `--format` wins. Otherwise the `-o` extension decides, and
    /// anything unrecognised falls back to the table.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        match (self.format, self.output.as_deref()) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path).unwrap_or_default(),
            (None, None) => crate::format::OutputFormat::Table,
        }
    }

    /// Builds the counter configuration from the ignore and filter flags.
    pub fn counter_config(&self) -> CounterConfig {
        let mut config = if self.no_default_ignores {
            CounterConfig::new().without_ignore_strings()
        } else {
            CounterConfig::new()
        };

        config = config.with_ignore_strings(self.ignore.iter().cloned());

        if let Some(ref pattern) = self.filter {
            config = config.with_filter(pattern.clone());
        }
        config
    }
}

/// Output format options.
///
/// - [`Table`](OutputFormat::Table) - aligned text (default)
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited
/// - [`Json`](OutputFormat::Json) - pretty JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text table
    #[default]
    #[value(alias = "txt")]
    Table,

    /// CSV with semicolon delimiter
    Csv,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatcount").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.format, None);
        assert_eq!(args.output_format(), crate::format::OutputFormat::Table);
        assert!(args.output.is_none());
        assert!(!args.stats);
        assert!(!args.date_range().unwrap().is_bounded());
        assert_eq!(args.counter_config(), CounterConfig::default());
    }

    #[test]
    fn test_date_range_both_formats() {
        let args = parse(&["chat.txt", "--after", "2023-05-01", "--before", "31/05/23"]);
        let range = args.date_range().unwrap();

        assert_eq!(range.min, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(range.max, NaiveDate::from_ymd_opt(2023, 5, 31));
    }

    #[test]
    fn test_bad_date_is_error() {
        let args = parse(&["chat.txt", "--after", "May 1st"]);
        let err = args.date_range().unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_counter_config_flags() {
        let args = parse(&[
            "chat.txt",
            "--no-default-ignores",
            "--ignore",
            "Bot",
            "--ignore",
            "Admin",
            "--filter",
            "hello",
        ]);
        let config = args.counter_config();

        assert_eq!(config.ignore_strings, vec!["Bot", "Admin"]);
        assert_eq!(config.filter_pattern.as_deref(), Some("hello"));
    }

    #[test]
    fn test_extra_ignores_keep_defaults() {
        let args = parse(&["chat.txt", "--ignore", "Bot"]);
        let config = args.counter_config();

        assert_eq!(
            config.ignore_strings.len(),
            crate::config::DEFAULT_IGNORE_STRINGS.len() + 1
        );
        assert_eq!(config.ignore_strings.last().map(String::as_str), Some("Bot"));
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(parse(&["c.txt", "-f", "csv"]).format, Some(OutputFormat::Csv));
        assert_eq!(parse(&["c.txt", "--format", "json"]).format, Some(OutputFormat::Json));
        assert_eq!(parse(&["c.txt", "--format", "txt"]).format, Some(OutputFormat::Table));
        assert!(Args::try_parse_from(["chatcount", "c.txt", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_output_format_from_extension() {
        use crate::format::OutputFormat as LibFormat;

        assert_eq!(parse(&["c.txt", "-o", "counts.csv"]).output_format(), LibFormat::Csv);
        assert_eq!(parse(&["c.txt", "-o", "out/counts.JSON"]).output_format(), LibFormat::Json);
        assert_eq!(parse(&["c.txt", "-o", "counts.txt"]).output_format(), LibFormat::Table);
        assert_eq!(parse(&["c.txt", "-o", "counts.md"]).output_format(), LibFormat::Table);
        assert_eq!(parse(&["c.txt", "-o", "counts"]).output_format(), LibFormat::Table);
    }

    #[test]
    fn test_explicit_format_beats_extension() {
        let args = parse(&["c.txt", "-f", "table", "-o", "counts.json"]);
        assert_eq!(args.output_format(), crate::format::OutputFormat::Table);
    }

    #[test]
    fn test_format_into_library() {
        let lib: crate::format::OutputFormat = OutputFormat::Json.into();
        assert_eq!(lib, crate::format::OutputFormat::Json);
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Table).unwrap();
        assert_eq!(json, "\"table\"");
    }
}
