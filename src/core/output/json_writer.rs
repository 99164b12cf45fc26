//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "total": 4,
///   "senders": [
///     {"rank": 1, "sender": "Alice", "count": 3, "share": 75.0},
///     {"rank": 2, "sender": "Bob", "count": 1, "share": 25.0}
///   ]
/// }
/// ```
pub fn write_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
