//! WorkDay validator.

use crate::core::rules::{self, Finding, Rule};
use crate::models::WorkDay;
use crate::utils::time::{serialize_minutes, serialize_opt_minutes};
use chrono::TimeDelta;
use serde::Serialize;

/// Metrics and findings for a single work day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day: u32,
    #[serde(serialize_with = "serialize_minutes")]
    pub worked: TimeDelta,
    /// `None` when the day has fewer than two blocks
    #[serde(serialize_with = "serialize_opt_minutes")]
    pub pause: Option<TimeDelta>,
    #[serde(serialize_with = "serialize_minutes")]
    pub home_office: TimeDelta,
    pub findings: Vec<Finding>,
}

impl DayReport {
    fn empty(day: u32) -> Self {
        Self {
            day,
            worked: TimeDelta::zero(),
            pause: None,
            home_office: TimeDelta::zero(),
            findings: Vec::new(),
        }
    }

    /// Number of hard violations (advisory and diagnostic findings excluded).
    pub fn fails(&self) -> usize {
        self.findings.iter().filter(|f| f.is_hard()).count()
    }

    /// True when the day was not evaluated at all.
    pub fn skipped(&self) -> bool {
        self.findings
            .iter()
            .any(|f| matches!(f.rule, Rule::NoTimeBlocks))
    }
}

/// Apply the day rules to one day.
///
/// The day type is not inspected here; the month validator only hands over
/// work days. A day without blocks is skipped with a diagnostic.
pub fn validate_day(num: u32, day: &WorkDay) -> DayReport {
    let mut report = DayReport::empty(num);

    let blocks = day.blocks();
    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        report.findings.push(Finding::on_day(num, Rule::NoTimeBlocks));
        return report;
    };

    report.worked = day.working_time();
    report.pause = day.pause_time();
    report.home_office = day.home_office_time();
    if day.has_invalid_fraction() {
        report
            .findings
            .push(Finding::on_day(num, Rule::InvalidHomeOfficeFraction));
    }

    for (i, gap) in day.gaps().iter().enumerate() {
        if *gap < TimeDelta::zero() {
            report
                .findings
                .push(Finding::on_day(num, Rule::OverlappingBlocks { block: i + 2 }));
        }
    }

    // max. worktime
    if report.worked > rules::max_daily_work() {
        report.findings.push(Finding::on_day(
            num,
            Rule::MaxDailyWorktime {
                worked: report.worked,
            },
        ));
    }

    // min. pause
    match report.pause {
        Some(pause) => {
            let required = rules::required_pause(report.worked);
            if pause < required {
                report
                    .findings
                    .push(Finding::on_day(num, Rule::MinPause { pause, required }));
            }
        }
        None => report
            .findings
            .push(Finding::on_day(num, Rule::PauseUndetermined)),
    }

    // service time
    let (begin, end) = (first.begin(), last.end());
    if !(begin <= rules::SERVICE_BEGIN && end >= rules::SERVICE_END) {
        report
            .findings
            .push(Finding::on_day(num, Rule::ServiceTime { begin, end }));
    }

    // max. home office
    if report.home_office > rules::max_home_office_day() {
        report.findings.push(Finding::on_day(
            num,
            Rule::MaxHomeOfficeDay {
                home_office: report.home_office,
            },
        ));
    }

    report
}
