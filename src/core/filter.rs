//! Date-range bounds for counting.
//!
//! This module provides [`DateRange`], the optional lower and upper calendar
//! day a message must fall within to be counted.
//!
//! # Filter Types
//!
//! | Bound | Method | Description |
//! |-------|--------|-------------|
//! | Min | [`with_min_date`](DateRange::with_min_date) / [`with_date_from`](DateRange::with_date_from) | Messages on or after day |
//! | Max | [`with_max_date`](DateRange::with_max_date) / [`with_date_to`](DateRange::with_date_to) | Messages on or before day |
//!
//! # Example
//!
//! ```
//! use chatcount::core::filter::DateRange;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatcount::Result<()> {
//! let range = DateRange::new()
//!     .with_date_from("2023-05-13")?
//!     .with_date_to("31/05/23")?;
//!
//! assert!(!range.contains(NaiveDate::from_ymd_opt(2023, 5, 12).unwrap()));
//! assert!(range.contains(NaiveDate::from_ymd_opt(2023, 5, 13).unwrap()));
//! assert!(range.contains(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap()));
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both bounds are inclusive and compared at day granularity
//! - Datetime inputs are truncated to their calendar day
//! - An absent bound leaves that side open

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::models::SkipReason;
use crate::error::ChatCountError;

/// Inclusive calendar-day bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Count only messages on or after this day.
    pub min: Option<NaiveDate>,

    /// Count only messages on or before this day.
    pub max: Option<NaiveDate>,
}

impl DateRange {
    /// Creates an unbounded range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a range from optional bounds.
    pub fn between(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Sets the lower bound (inclusive).
    #[must_use]
    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min = Some(date);
        self
    }

    /// Sets the upper bound (inclusive).
    #[must_use]
    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max = Some(date);
        self
    }

    /// Sets the lower bound from a datetime, dropping the time of day.
    #[must_use]
    pub fn with_min_datetime(self, datetime: NaiveDateTime) -> Self {
        self.with_min_date(datetime.date())
    }

    /// Sets the upper bound from a datetime, dropping the time of day.
    #[must_use]
    pub fn with_max_datetime(self, datetime: NaiveDateTime) -> Self {
        self.with_max_date(datetime.date())
    }

    /// Sets the lower bound from `YYYY-MM-DD` or `DD/MM/YY`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatCountError::InvalidDate`] if the string is neither.
    pub fn with_date_from(self, date_str: &str) -> Result<Self, ChatCountError> {
        Ok(self.with_min_date(parse_bound_date(date_str)?))
    }

    /// Sets the upper bound from `YYYY-MM-DD` or `DD/MM/YY`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatCountError::InvalidDate`] if the string is neither.
    pub fn with_date_to(self, date_str: &str) -> Result<Self, ChatCountError> {
        Ok(self.with_max_date(parse_bound_date(date_str)?))
    }

    /// Returns `true` if either bound is set.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Returns `true` if `date` lies within both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check(date).is_ok()
    }

    pub(crate) fn check(&self, date: NaiveDate) -> Result<(), SkipReason> {
        if self.min.is_some_and(|min| date < min) {
            return Err(SkipReason::BeforeMinDate);
        }
        if self.max.is_some_and(|max| date > max) {
            return Err(SkipReason::AfterMaxDate);
        }
        Ok(())
    }
}

/// Parses a user-supplied bound date.
///
/// Accepts ISO `YYYY-MM-DD` and the transcript's own `DD/MM/YY` (year taken
/// as `2000 + YY`). Unlike transcript headers, bound dates must be real
/// calendar days.
pub fn parse_bound_date(date_str: &str) -> Result<NaiveDate, ChatCountError> {
    let trimmed = date_str.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_short_date(trimmed))
        .ok_or_else(|| ChatCountError::invalid_date(date_str))
}

fn parse_short_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('/').collect();
    let [day, month, year] = parts[..] else {
        return None;
    };

    if ![day, month, year].into_iter().all(is_two_digits) {
        return None;
    }

    NaiveDate::from_ymd_opt(
        2000 + year.parse::<i32>().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    )
}

fn is_two_digits(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit())
}
