use super::work_day::WorkDay;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

/// All days of one PAN month file, keyed by day number (1–31).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkMonth {
    month: Option<u32>,
    year: Option<i32>,
    days: BTreeMap<u32, WorkDay>,
}

impl WorkMonth {
    pub fn new(days: BTreeMap<u32, WorkDay>) -> AppResult<Self> {
        if let Some(bad) = days.keys().find(|n| !(1..=31).contains(*n)) {
            return Err(AppError::InvalidDayNumber(bad.to_string()));
        }

        Ok(Self {
            month: None,
            year: None,
            days,
        })
    }

    /// Attach the month/year found in the file header.
    pub fn with_period(mut self, month: Option<u32>, year: Option<i32>) -> Self {
        self.month = month.filter(|m| (1..=12).contains(m));
        self.year = year;
        self
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Days in ascending day-number order.
    pub fn days(&self) -> impl Iterator<Item = (u32, &WorkDay)> {
        self.days.iter().map(|(n, d)| (*n, d))
    }

    pub fn day(&self, num: u32) -> Option<&WorkDay> {
        self.days.get(&num)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
