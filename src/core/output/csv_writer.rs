//! CSV report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::Report;
use crate::error::{ChatCountError, Result};

const HEADER: [&str; 4] = ["Rank", "Sender", "Messages", "Share"];

/// Writes a report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Rank`, `Sender`, `Messages`, `Share` (percent, one decimal)
/// - Encoding: UTF-8
pub fn write_csv(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(report, file)
}

/// Converts a report to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(report: &Report, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(HEADER)?;

    for row in &report.rows {
        writer.write_record([
            row.rank.to_string(),
            row.sender.clone(),
            row.count.to_string(),
            format!("{:.1}", row.share),
        ])?;
    }

    writer.flush().map_err(ChatCountError::from)
}
