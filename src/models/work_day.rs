use super::{day_type::DayType, time_block::TimeBlock};
use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of time blocks a PAN day can hold
/// (morning, afternoon, third, fourth).
pub const MAX_BLOCKS: usize = 4;

/// Leading fraction of a home-office description, e.g. "0.5 Homeoffice".
static HOME_OFFICE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("valid fraction regex"));

const HOME_OFFICE_MARKER: &str = "homeoffice";

/// One day of a PAN month: classification, free text and time blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDay {
    day_type: DayType,
    description: Option<String>,
    blocks: Vec<TimeBlock>,
}

impl WorkDay {
    pub fn new(
        day_type: DayType,
        description: Option<String>,
        blocks: Vec<TimeBlock>,
    ) -> AppResult<Self> {
        if blocks.len() > MAX_BLOCKS {
            return Err(AppError::TooManyBlocks(blocks.len()));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            day_type,
            description,
            blocks,
        })
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    /// Sum of all block durations.
    pub fn working_time(&self) -> TimeDelta {
        self.blocks
            .iter()
            .fold(TimeDelta::zero(), |acc, b| acc + b.duration())
    }

    /// Raw gaps between consecutive blocks, in order.
    /// A negative gap means the blocks overlap or are out of order.
    pub fn gaps(&self) -> Vec<TimeDelta> {
        self.blocks
            .windows(2)
            .map(|w| w[1].begin() - w[0].end())
            .collect()
    }

    /// Total pause between blocks; `None` when fewer than two blocks exist.
    /// Negative gaps count as zero.
    pub fn pause_time(&self) -> Option<TimeDelta> {
        if self.blocks.len() < 2 {
            return None;
        }

        Some(
            self.gaps()
                .into_iter()
                .map(|g| g.max(TimeDelta::zero()))
                .fold(TimeDelta::zero(), |acc, g| acc + g),
        )
    }

    /// Whether the description marks the day as (partial) home office.
    pub fn is_home_office(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(HOME_OFFICE_MARKER))
    }

    /// Fraction written in front of a home-office marker, if any.
    /// Not range-checked.
    pub fn stated_fraction(&self) -> Option<f64> {
        if !self.is_home_office() {
            return None;
        }

        self.description
            .as_deref()
            .and_then(|d| HOME_OFFICE_FRACTION.find(d))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    }

    /// A stated fraction outside `0.0..=1.0` (or not finite).
    pub fn has_invalid_fraction(&self) -> bool {
        self.stated_fraction()
            .is_some_and(|f| !(0.0..=1.0).contains(&f))
    }

    /// Fraction of the day spent in home office (0.0 when not home office).
    /// An invalid stated fraction counts as the whole day.
    pub fn home_office_fraction(&self) -> f64 {
        if !self.is_home_office() {
            return 0.0;
        }

        match self.stated_fraction() {
            Some(f) if (0.0..=1.0).contains(&f) => f,
            _ => 1.0,
        }
    }

    /// Worked time scaled by the home-office fraction, never above worked time.
    pub fn home_office_time(&self) -> TimeDelta {
        let fraction = self.home_office_fraction();
        if fraction == 0.0 {
            return TimeDelta::zero();
        }

        let worked = self.working_time();
        let scaled = (worked.num_seconds() as f64 * fraction).round();
        if !scaled.is_finite() {
            return worked;
        }

        TimeDelta::try_seconds(scaled as i64)
            .map(|ho| ho.min(worked))
            .unwrap_or(worked)
    }
}
