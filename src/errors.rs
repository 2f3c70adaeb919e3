//! Unified application error type.
//! Parsers, configuration and CLI handlers all return AppError so that
//! `main` has a single place where failures are reported.
//! Rule violations are never errors: they are `Finding`s in a report.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Data model / PAN parsing
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid time block: begin {begin} is after end {end}")]
    InvalidBlock { begin: String, end: String },

    #[error("Too many time blocks: {0} (at most 4 per day)")]
    TooManyBlocks(usize),

    #[error("Invalid day number: {0}")]
    InvalidDayNumber(String),

    #[error("Day {0} appears more than once in the month file")]
    DuplicateDay(u32),

    #[error("Unknown day type: {0}")]
    InvalidDayType(String),

    #[error("PAN settings file not found: {}", .0.display())]
    SettingsNotFound(PathBuf),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
