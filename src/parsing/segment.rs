//! Boundary-based transcript segmentation.
//!
//! A transcript is cut at every offset where [`BOUNDARY_PATTERN`] matches.
//! Each chunk runs from one boundary up to (not including) the next, so
//! continuation lines stay attached to their header. Text before the first
//! boundary, if any, becomes a leading preamble chunk.
//!
//! Boundaries are searched one character past the previous start rather than
//! past the previous match end. A header that appears inside another header's
//! sender text therefore still starts its own chunk.
//!
//! [`BOUNDARY_PATTERN`]: super::whatsapp::BOUNDARY_PATTERN

use super::whatsapp::BOUNDARY;

/// Iterator over the chunks of a transcript.
///
/// Created by [`chunks`]. Yields no items for empty input.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.start >= self.text.len() {
            return None;
        }

        let end = next_boundary(self.text, self.start).unwrap_or(self.text.len());
        let chunk = &self.text[self.start..end];
        self.start = end;
        Some(chunk)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

/// Splits a transcript into message chunks.
///
/// # Example
///
/// ```rust
/// use chatcount::parsing::chunks;
///
/// let text = "12/05/23, 10:00 - Alice: hi\nhow are you\n12/05/23, 10:05 - Bob: good";
/// let parts: Vec<&str> = chunks(text).collect();
///
/// assert_eq!(parts, vec![
///     "12/05/23, 10:00 - Alice: hi\nhow are you\n",
///     "12/05/23, 10:05 - Bob: good",
/// ]);
/// ```
pub fn chunks(text: &str) -> Chunks<'_> {
    Chunks { text, start: 0 }
}

/// Returns the byte offset of every message boundary in `text`.
pub fn boundary_offsets(text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;

    while let Some(m) = BOUNDARY.find_at(text, from) {
        offsets.push(m.start());
        from = step_past(text, m.start());
    }

    offsets
}

/// First boundary strictly after `start`.
fn next_boundary(text: &str, start: usize) -> Option<usize> {
    BOUNDARY
        .find_at(text, step_past(text, start))
        .map(|m| m.start())
}

/// Offset of the character following the one at `pos`.
fn step_past(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}
