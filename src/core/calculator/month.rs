//! WorkMonth validator: folds day reports in ascending day order.

use super::day::{DayReport, validate_day};
use crate::core::rules::{self, Finding, Rule};
use crate::models::WorkMonth;
use crate::utils::time::serialize_minutes;
use chrono::TimeDelta;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Work days only, ascending
    pub days: Vec<DayReport>,
    /// Month-level findings
    pub findings: Vec<Finding>,
    #[serde(serialize_with = "serialize_minutes")]
    pub worked_total: TimeDelta,
    #[serde(serialize_with = "serialize_minutes")]
    pub home_office_total: TimeDelta,
}

impl MonthReport {
    /// Hard violations over all days. Month-level findings are advisory.
    pub fn fails(&self) -> usize {
        self.days.iter().map(DayReport::fails).sum::<usize>()
            + self.findings.iter().filter(|f| f.is_hard()).count()
    }

    pub fn passed(&self) -> bool {
        self.fails() == 0
    }

    /// Every finding in reporting order: days first, then the month.
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.days
            .iter()
            .flat_map(|d| d.findings.iter())
            .chain(self.findings.iter())
    }
}

pub fn validate_month(month: &WorkMonth) -> MonthReport {
    let mut days = Vec::new();
    let mut worked_total = TimeDelta::zero();
    let mut home_office_total = TimeDelta::zero();

    for (num, day) in month.days() {
        if !day.day_type().is_work() {
            continue;
        }

        let report = validate_day(num, day);
        worked_total = saturating_add(worked_total, report.worked);
        home_office_total = saturating_add(home_office_total, report.home_office);
        days.push(report);
    }

    let mut findings = Vec::new();
    if home_office_total > rules::max_home_office_month() {
        findings.push(Finding::on_month(Rule::MaxHomeOfficeMonth {
            total: home_office_total,
        }));
    }

    MonthReport {
        month: month.month(),
        year: month.year(),
        days,
        findings,
        worked_total,
        home_office_total,
    }
}

fn saturating_add(total: TimeDelta, d: TimeDelta) -> TimeDelta {
    total.checked_add(&d).unwrap_or(TimeDelta::MAX)
}
