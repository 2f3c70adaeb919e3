pub mod calculator;
pub mod config;
pub mod report;
pub mod rules;

pub use calculator::day::{DayReport, validate_day};
pub use calculator::month::{MonthReport, validate_month};
