use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// Seconds between 1970-01-01 and 2001-01-01. The store keeps every
/// timestamp as an offset from the 2001 epoch (Core Data convention), so
/// this constant is added before any formatting or date arithmetic.
pub const EPOCH_2001_OFFSET: i64 = 978_307_200;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Convert a stored epoch-2001 offset to a UTC timestamp.
/// Sub-second precision in the store is dropped.
pub fn from_core_data(seconds: f64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds as i64 + EPOCH_2001_OFFSET, 0)
        .single()
}

/// Convert unix seconds to an epoch-2001 offset.
pub fn to_core_data(unix_seconds: i64) -> f64 {
    (unix_seconds - EPOCH_2001_OFFSET) as f64
}

/// `[start, end)` window of one calendar day in epoch-2001 seconds (UTC).
/// None when the year has no such day (Feb 29 outside leap years).
pub fn day_window_core_data(year: i32, month: u32, day: u32) -> Option<(f64, f64)> {
    let start = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    let end = start + Duration::days(1);
    Some((
        to_core_data(start.and_utc().timestamp()),
        to_core_data(end.and_utc().timestamp()),
    ))
}

/// A parsed month/day query, optionally carrying the year to anchor the
/// backwards scan from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
    pub anchor_year: Option<i32>,
}

/// Parse the `on-this-day` date argument.
///
/// Supported formats:
/// - MM-DD       → month/day, anchored at the current year
/// - YYYY-MM-DD  → month/day, anchored at the given year
pub fn parse_month_day(s: &str) -> AppResult<MonthDay> {
    let t = s.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return Ok(MonthDay {
            month: d.month(),
            day: d.day(),
            anchor_year: Some(d.year()),
        });
    }

    // MM-DD: borrow a leap year so 02-29 stays parseable
    if let Ok(d) = NaiveDate::parse_from_str(&format!("2000-{t}"), "%Y-%m-%d") {
        return Ok(MonthDay {
            month: d.month(),
            day: d.day(),
            anchor_year: None,
        });
    }

    Err(AppError::invalid_input(
        "date",
        format!("'{s}' is not a MM-DD or YYYY-MM-DD date"),
    ))
}
