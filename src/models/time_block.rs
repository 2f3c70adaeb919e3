use crate::errors::{AppError, AppResult};
use crate::utils::time::format_time;
use chrono::{NaiveTime, TimeDelta};
use std::fmt;

/// One recorded working interval of a day (minute resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBlock {
    begin: NaiveTime,
    end: NaiveTime,
}

impl TimeBlock {
    /// Build a block, rejecting `begin > end`.
    pub fn new(begin: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if begin > end {
            return Err(AppError::InvalidBlock {
                begin: format_time(begin),
                end: format_time(end),
            });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> NaiveTime {
        self.begin
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.begin
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_time(self.begin), format_time(self.end))
    }
}
