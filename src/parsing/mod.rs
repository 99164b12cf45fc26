//! Transcript parsing primitives.
//!
//! This module contains the pieces the validator and the counter are built
//! from:
//!
//! - [`whatsapp`] - header patterns and per-chunk extraction
//! - [`segment`] - boundary-based splitting of a transcript into chunks
//! - [`date`] - transcript date construction (`dd/mm/yy`, year 2000-based)

pub mod date;
pub mod segment;
pub mod whatsapp;

// Re-export commonly used items
pub use date::{date_from_parts, parse_transcript_date};
pub use segment::{Chunks, boundary_offsets, chunks};
pub use whatsapp::{ParsedMessage, is_header_line, parse_chunk};
