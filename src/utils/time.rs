//! Time utilities: parsing HH:MM and PAN ranges, formatting durations.

use crate::errors::{AppError, AppResult};
use crate::models::TimeBlock;
use chrono::{NaiveTime, TimeDelta};
use serde::Serializer;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.trim().to_string()))
}

/// Parse a PAN range such as `09:00 - 12:30`.
///
/// Returns `Ok(None)` for an empty range, an error for anything else that
/// is not a valid `begin <= end` pair.
pub fn parse_range(range: &str) -> AppResult<Option<TimeBlock>> {
    let range = range.trim();
    if range.is_empty() {
        return Ok(None);
    }

    let (begin, end) = range
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(range.to_string()))?;

    let block = TimeBlock::new(parse_time_strict(begin)?, parse_time_strict(end)?)?;
    Ok(Some(block))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format a duration as `HH:MM` (hours are not wrapped at 24).
pub fn format_duration(d: TimeDelta) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// serde helper: durations are exported as whole minutes.
pub fn serialize_minutes<S: Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_minutes())
}

pub fn serialize_opt_minutes<S: Serializer>(
    d: &Option<TimeDelta>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&d.num_minutes()),
        None => s.serialize_none(),
    }
}
