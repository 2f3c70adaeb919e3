//! Labor-time rules: thresholds and the findings they produce.

use crate::utils::time::serialize_minutes;
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

/// Above this a work day is too long.
pub const MAX_DAILY_WORK_MINUTES: i64 = 10 * 60;
/// Work days up to this length need the short pause, longer ones the long pause.
pub const LONG_DAY_MINUTES: i64 = 9 * 60;
pub const MIN_PAUSE_MINUTES: i64 = 30;
pub const MIN_PAUSE_LONG_DAY_MINUTES: i64 = 45;
pub const MAX_HOME_OFFICE_DAY_MINUTES: i64 = 8 * 60;
/// Ten calendar days (10 × 24h), not ten working days.
pub const MAX_HOME_OFFICE_MONTH_DAYS: i64 = 10;

pub fn max_daily_work() -> TimeDelta {
    TimeDelta::minutes(MAX_DAILY_WORK_MINUTES)
}

pub fn max_home_office_day() -> TimeDelta {
    TimeDelta::minutes(MAX_HOME_OFFICE_DAY_MINUTES)
}

pub fn max_home_office_month() -> TimeDelta {
    TimeDelta::days(MAX_HOME_OFFICE_MONTH_DAYS)
}

/// Minimum pause for a given worked duration.
pub fn required_pause(worked: TimeDelta) -> TimeDelta {
    if worked <= TimeDelta::minutes(LONG_DAY_MINUTES) {
        TimeDelta::minutes(MIN_PAUSE_MINUTES)
    } else {
        TimeDelta::minutes(MIN_PAUSE_LONG_DAY_MINUTES)
    }
}

/// Latest allowed begin of the first block.
pub const SERVICE_BEGIN: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(t) => t,
    None => panic!("09:00 is a valid time"),
};

/// Earliest allowed end of the last block.
pub const SERVICE_END: NaiveTime = match NaiveTime::from_hms_opt(15, 0, 0) {
    Some(t) => t,
    None => panic!("15:00 is a valid time"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Counted in the fail total
    Hard,
    /// Reported, not counted
    Advisory,
    /// Data-quality note about the input, not counted
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    MaxDailyWorktime {
        #[serde(serialize_with = "serialize_minutes")]
        worked: TimeDelta,
    },
    MinPause {
        #[serde(serialize_with = "serialize_minutes")]
        pause: TimeDelta,
        #[serde(serialize_with = "serialize_minutes")]
        required: TimeDelta,
    },
    ServiceTime {
        begin: NaiveTime,
        end: NaiveTime,
    },
    MaxHomeOfficeDay {
        #[serde(serialize_with = "serialize_minutes")]
        home_office: TimeDelta,
    },
    MaxHomeOfficeMonth {
        #[serde(serialize_with = "serialize_minutes")]
        total: TimeDelta,
    },
    NoTimeBlocks,
    PauseUndetermined,
    /// Block `block` (1-based) starts before the previous one ends.
    OverlappingBlocks {
        block: usize,
    },
    /// Home-office fraction outside 0.0..=1.0; the whole day was counted.
    InvalidHomeOfficeFraction,
}

impl Rule {
    pub fn severity(&self) -> Severity {
        match self {
            Rule::MaxDailyWorktime { .. }
            | Rule::MinPause { .. }
            | Rule::MaxHomeOfficeDay { .. } => Severity::Hard,
            Rule::ServiceTime { .. } | Rule::MaxHomeOfficeMonth { .. } => Severity::Advisory,
            Rule::NoTimeBlocks
            | Rule::PauseUndetermined
            | Rule::OverlappingBlocks { .. }
            | Rule::InvalidHomeOfficeFraction => Severity::Diagnostic,
        }
    }
}

/// One rule outcome. `day` is `None` for month-level findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub day: Option<u32>,
    pub severity: Severity,
    #[serde(flatten)]
    pub rule: Rule,
}

impl Finding {
    pub fn on_day(day: u32, rule: Rule) -> Self {
        Self {
            day: Some(day),
            severity: rule.severity(),
            rule,
        }
    }

    pub fn on_month(rule: Rule) -> Self {
        Self {
            day: None,
            severity: rule.severity(),
            rule,
        }
    }

    pub fn is_hard(&self) -> bool {
        self.severity == Severity::Hard
    }
}
