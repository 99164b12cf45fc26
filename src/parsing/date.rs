//! Transcript date construction.
//!
//! Header dates are `dd/mm/yy` with the year taken as `2000 + yy`. Day and
//! month are not range-checked: out-of-range values roll over into the
//! neighbouring month or year (`31/02/23` is 3 March 2023, `00/01/23` is
//! 31 December 2022). Date-range filtering compares against these rolled-over
//! values.

use chrono::{Days, Months, NaiveDate};

/// Parses a `dd/mm/yy` header date.
///
/// Returns `None` if the string does not have three numeric `/`-separated
/// parts.
///
/// # Example
///
/// ```rust
/// use chatcount::parsing::parse_transcript_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_transcript_date("12/05/23"), NaiveDate::from_ymd_opt(2023, 5, 12));
/// assert_eq!(parse_transcript_date("31/02/23"), NaiveDate::from_ymd_opt(2023, 3, 3));
/// ```
pub fn parse_transcript_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    date_from_parts(year.checked_add(2000)?, month, day)
}

/// Builds a date from a 1-based month and day, letting both overflow.
///
/// Counts from 1 January of `year`: adds `month - 1` months, then `day - 1`
/// days. A zero month or day steps backwards.
pub fn date_from_parts(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;

    let month_start = match month {
        0 => first.checked_sub_months(Months::new(1))?,
        m => first.checked_add_months(Months::new(m - 1))?,
    };

    match day {
        0 => month_start.checked_sub_days(Days::new(1)),
        d => month_start.checked_add_days(Days::new(u64::from(d - 1))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_regular_dates() {
        assert_eq!(parse_transcript_date("12/05/23"), ymd(2023, 5, 12));
        assert_eq!(parse_transcript_date("01/01/00"), ymd(2000, 1, 1));
        assert_eq!(parse_transcript_date("31/12/99"), ymd(2099, 12, 31));
        assert_eq!(parse_transcript_date("29/02/24"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_day_overflow_rolls_forward() {
        assert_eq!(parse_transcript_date("31/02/23"), ymd(2023, 3, 3));
        assert_eq!(parse_transcript_date("30/02/24"), ymd(2024, 3, 1));
        assert_eq!(parse_transcript_date("32/12/23"), ymd(2024, 1, 1));
        assert_eq!(parse_transcript_date("99/01/23"), ymd(2023, 4, 9));
    }

    #[test]
    fn test_month_overflow_rolls_into_next_year() {
        assert_eq!(parse_transcript_date("15/13/23"), ymd(2024, 1, 15));
        assert_eq!(parse_transcript_date("01/25/23"), ymd(2025, 1, 1));
    }

    #[test]
    fn test_zero_parts_roll_backward() {
        assert_eq!(parse_transcript_date("00/01/23"), ymd(2022, 12, 31));
        assert_eq!(parse_transcript_date("01/00/23"), ymd(2022, 12, 1));
        assert_eq!(parse_transcript_date("00/03/24"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_transcript_date("ab/05/23"), None);
        assert_eq!(parse_transcript_date("12/05"), None);
        assert_eq!(parse_transcript_date(""), None);
    }
}
