//! WhatsApp TXT header patterns and per-chunk extraction.
//!
//! Android-style exports put one message per header line:
//!
//! ```text
//! 12/05/23, 10:00 - Alice: Hello
//! 12/05/23, 9:41 PM - Bob: Hi there
//! and a second line
//! ```
//!
//! Both the 24-hour and the 12-hour (meridiem) variants are recognized.
//! Digits are matched as ASCII `[0-9]` so that other Unicode digit classes
//! never start a header.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::date::parse_transcript_date;

/// Shape of a transcript's first line: `dd/mm/yy, H:MM[ AM/PM] - text`.
///
/// The text may not contain a carriage return, so a CRLF first line does not
/// match.
pub const HEADER_LINE_PATTERN: &str =
    r"^[0-9]{2}/[0-9]{2}/[0-9]{2},\s*[0-9]{1,2}:[0-9]{2}\s*(?:[APap][Mm]?)?\s*-\s*[^\r\n]+$";

/// Start of a message: date, time, optional meridiem, dash, sender, colon.
///
/// `.` does not cross newlines, so the sender and its colon must sit on the
/// header line itself.
pub const BOUNDARY_PATTERN: &str =
    r"[0-9]{2}/[0-9]{2}/[0-9]{2},\s*[0-9]{1,2}:[0-9]{2}(?:\s*[APap][Mm])?\s*-\s*.+?:";

/// Leading `dd/mm/yy` of a chunk.
pub const LEADING_DATE_PATTERN: &str = r"^([0-9]{2}/[0-9]{2}/[0-9]{2})";

/// First ` - name: ` occurrence in a chunk.
pub const SENDER_PATTERN: &str = r" - (.+?): ";

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_LINE_PATTERN).expect("header line pattern is valid"));

pub(crate) static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"));

static LEADING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEADING_DATE_PATTERN).expect("leading date pattern is valid"));

static SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENDER_PATTERN).expect("sender pattern is valid"));

/// A message extracted from one chunk.
///
/// Borrows from the transcript; it only lives for one counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Calendar day of the message header.
    pub date: NaiveDate,
    /// Sender name, trimmed.
    pub sender: &'a str,
    /// The whole chunk: header plus continuation lines.
    pub raw: &'a str,
}

/// Returns `true` if `line` has the shape of a transcript header line.
///
/// `line` must not contain the trailing newline.
pub fn is_header_line(line: &str) -> bool {
    HEADER_LINE.is_match(line)
}

/// Extracts the date and sender from a chunk.
///
/// Returns `None` for chunks that are not well-formed messages: a preamble
/// without a leading date, or a header without a `" - name: "` part.
///
/// # Example
///
/// ```rust
/// use chatcount::parsing::parse_chunk;
/// use chrono::NaiveDate;
///
/// let msg = parse_chunk("12/05/23, 10:00 - Alice : hi\nsecond line").unwrap();
/// assert_eq!(msg.sender, "Alice");
/// assert_eq!(msg.date, NaiveDate::from_ymd_opt(2023, 5, 12).unwrap());
///
/// assert!(parse_chunk("just some text").is_none());
/// ```
pub fn parse_chunk(chunk: &str) -> Option<ParsedMessage<'_>> {
    let date_str = LEADING_DATE.captures(chunk)?.get(1)?.as_str();
    let sender = SENDER.captures(chunk)?.get(1)?.as_str();
    let date = parse_transcript_date(date_str)?;

    Some(ParsedMessage {
        date,
        sender: sender.trim(),
        raw: chunk,
    })
}
