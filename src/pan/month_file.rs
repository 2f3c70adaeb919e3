use crate::errors::{AppError, AppResult};
use crate::models::{DayType, TimeBlock, WorkDay, WorkMonth};
use crate::utils::time::parse_range;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Month file as stored by PAN. The root element name is not checked.
#[derive(Debug, Deserialize)]
struct RawMonth {
    #[serde(rename = "Monat", default)]
    month: Option<String>,
    #[serde(rename = "Jahr", default)]
    year: Option<String>,
    /// "true" when the file carries the third/fourth time ranges
    #[serde(rename = "Erweitert", default)]
    extended: Option<String>,
    #[serde(rename = "Tag", default)]
    days: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(rename = "Datum")]
    date: String,
    #[serde(rename = "TagesTyp")]
    day_type: String,
    #[serde(rename = "Bemerkung", default)]
    description: Option<String>,
    #[serde(rename = "Vormittag", default)]
    morning: Option<String>,
    #[serde(rename = "Nachmittag", default)]
    afternoon: Option<String>,
    #[serde(rename = "Dritte", default)]
    third: Option<String>,
    #[serde(rename = "Vierte", default)]
    fourth: Option<String>,
}

pub fn read_month_file(path: &Path) -> AppResult<WorkMonth> {
    debug!(path = %path.display(), "reading PAN month file");
    let xml = super::read_text(path)?;
    parse_month_xml(&xml)
}

pub fn parse_month_xml(xml: &str) -> AppResult<WorkMonth> {
    let raw: RawMonth = quick_xml::de::from_str(xml)?;

    let extended = raw
        .extended
        .as_deref()
        .is_some_and(|e| e.trim().eq_ignore_ascii_case("true"));

    let mut days = BTreeMap::new();
    for raw_day in raw.days {
        let (num, day) = convert_day(raw_day, extended)?;
        if days.insert(num, day).is_some() {
            return Err(AppError::DuplicateDay(num));
        }
    }

    debug!(days = days.len(), extended, "parsed PAN month");

    let month = raw.month.and_then(|m| m.trim().parse::<u32>().ok());
    let year = raw.year.and_then(|y| y.trim().parse::<i32>().ok());

    Ok(WorkMonth::new(days)?.with_period(month, year))
}

fn convert_day(raw: RawDay, extended: bool) -> AppResult<(u32, WorkDay)> {
    let num = raw
        .date
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidDayNumber(raw.date.trim().to_string()))?;

    let day_type = DayType::from_pan_label(&raw.day_type)
        .ok_or_else(|| AppError::InvalidDayType(raw.day_type.trim().to_string()))?;

    let mut ranges = vec![raw.morning, raw.afternoon];
    if extended {
        ranges.push(raw.third);
        ranges.push(raw.fourth);
    }

    let blocks: Vec<TimeBlock> = ranges
        .into_iter()
        .flatten()
        .filter_map(|r| block_or_absent(num, &r))
        .collect();

    Ok((num, WorkDay::new(day_type, raw.description, blocks)?))
}

/// Malformed ranges are treated as absent, never as a hard error.
fn block_or_absent(num: u32, range: &str) -> Option<TimeBlock> {
    match parse_range(range) {
        Ok(block) => block,
        Err(e) => {
            warn!(day = num, range, error = %e, "ignoring malformed time range");
            None
        }
    }
}
