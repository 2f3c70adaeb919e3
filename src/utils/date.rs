use chrono::NaiveDate;

/// `March 2024` for a month header; `None` when the file had no valid period.
pub fn month_title(month: Option<u32>, year: Option<i32>) -> Option<String> {
    let d = NaiveDate::from_ymd_opt(year?, month?, 1)?;
    Some(d.format("%B %Y").to_string())
}
