//! Presentation of validation results: findings → text lines.
//! Colors are applied later by `ui::messages`.

use crate::core::calculator::day::DayReport;
use crate::core::calculator::month::MonthReport;
use crate::core::rules::{self, Finding, Rule, Severity};
use crate::errors::AppResult;
use crate::utils::time::{format_duration, format_time};
use serde::Serialize;

pub const SEPARATOR: &str = "----------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Hard,
    Advisory,
    Diagnostic,
    Success,
}

impl From<Severity> for Tone {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Hard => Tone::Hard,
            Severity::Advisory => Tone::Advisory,
            Severity::Diagnostic => Tone::Diagnostic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

/// Render one finding. Day findings carry the two-digit day number;
/// advisory lines are prefixed with `! `, diagnostics with `? `.
pub fn finding_line(finding: &Finding) -> ReportLine {
    let day = finding
        .day
        .map(|d| format!("{:02}. ", d))
        .unwrap_or_default();

    let body = match &finding.rule {
        Rule::MaxDailyWorktime { worked } => format!(
            "max. working time exceeded ({} > {})",
            format_duration(*worked),
            format_duration(rules::max_daily_work())
        ),
        Rule::MinPause { pause, required } => format!(
            "min. pause time not reached ({} < {})",
            format_duration(*pause),
            format_duration(*required)
        ),
        Rule::ServiceTime { begin, end } => format!(
            "service time possibly not covered ({} - {})",
            format_time(*begin),
            format_time(*end)
        ),
        Rule::MaxHomeOfficeDay { home_office } => format!(
            "max. home office exceeded ({} > {})",
            format_duration(*home_office),
            format_duration(rules::max_home_office_day())
        ),
        Rule::MaxHomeOfficeMonth { total } => format!(
            "max. monthly home office exceeded ({} > {} days)",
            format_duration(*total),
            rules::MAX_HOME_OFFICE_MONTH_DAYS
        ),
        Rule::NoTimeBlocks => "work day without time blocks, skipped".to_string(),
        Rule::PauseUndetermined => {
            "single time block, pause time cannot be determined".to_string()
        }
        Rule::OverlappingBlocks { block } => format!(
            "time block {} overlaps block {}, gap counted as zero",
            block,
            block - 1
        ),
        Rule::InvalidHomeOfficeFraction => {
            "home office fraction out of range, whole day counted".to_string()
        }
    };

    let prefix = match finding.severity {
        Severity::Hard => "",
        Severity::Advisory => "! ",
        Severity::Diagnostic => "? ",
    };

    ReportLine {
        tone: finding.severity.into(),
        text: format!("{prefix}{day}{body}"),
    }
}

pub fn day_lines(report: &DayReport) -> Vec<ReportLine> {
    report.findings.iter().map(finding_line).collect()
}

/// Day lines in ascending day order, followed by month-level lines.
pub fn month_lines(report: &MonthReport) -> Vec<ReportLine> {
    report.all_findings().map(finding_line).collect()
}

pub fn summary_line(report: &MonthReport) -> ReportLine {
    match report.fails() {
        0 => ReportLine {
            tone: Tone::Success,
            text: "No violations detected".to_string(),
        },
        1 => ReportLine {
            tone: Tone::Hard,
            text: "1 violation detected".to_string(),
        },
        n => ReportLine {
            tone: Tone::Hard,
            text: format!("{n} violations detected"),
        },
    }
}

/// Short totals line printed after the findings.
pub fn totals_line(report: &MonthReport) -> String {
    format!(
        "Worked: {} | Home office: {} | Work days: {}",
        format_duration(report.worked_total),
        format_duration(report.home_office_total),
        report.days.len()
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a MonthReport,
    fails: usize,
    passed: bool,
}

pub fn to_json(report: &MonthReport) -> AppResult<String> {
    let json = JsonReport {
        report,
        fails: report.fails(),
        passed: report.passed(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
