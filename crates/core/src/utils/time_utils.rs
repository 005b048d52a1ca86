use chrono::{Datelike, NaiveDate, Utc};

use crate::errors::{Result, ValidationError};

/// The civil date used for "today" comparisons across the ledger.
pub fn today() -> NaiveDate {
    Utc::now().naive_utc().date()
}

/// First day of the month containing `date` and first day of the following
/// month, forming the half-open range `[start, end)`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    let end = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
    };
    (start, end)
}

/// Parses a `YYYY-MM` query parameter into the half-open range `[start, end)`.
pub fn parse_month_param(month: &str) -> Result<(NaiveDate, NaiveDate)> {
    // chrono's %m accepts single-digit months, so check the shape first
    let well_formed = month.len() == 7
        && month.as_bytes()[4] == b'-'
        && month[..4].bytes().all(|b| b.is_ascii_digit())
        && month[5..].bytes().all(|b| b.is_ascii_digit());

    let parsed = if well_formed {
        NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
    } else {
        None
    };

    let parsed = parsed.ok_or_else(|| {
        ValidationError::InvalidInput(format!("Invalid month '{}', expected YYYY-MM", month))
    })?;
    Ok(month_bounds(parsed))
}
