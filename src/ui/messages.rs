use crate::core::report::{ReportLine, Tone};
use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI colors for everything printed through this module.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn paint<T: fmt::Display>(style: Style, msg: T) -> String {
    if COLOR.load(Ordering::Relaxed) {
        style.paint(msg.to_string()).to_string()
    } else {
        msg.to_string()
    }
}

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue.bold(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green.bold(), ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow.bold(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red.bold(), ICON_ERR), msg);
}

/// Section header, e.g. `-----Check-----`
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", paint(Style::new().bold(), format!("-----{}-----", msg)));
}

fn style_for(tone: Tone) -> Style {
    match tone {
        Tone::Hard => Colour::Red.normal(),
        Tone::Advisory => Colour::Cyan.normal(),
        Tone::Diagnostic => Colour::Yellow.normal(),
        Tone::Success => Colour::Green.normal(),
    }
}

/// Print one validation line in the color of its tone.
pub fn report_line(line: &ReportLine) {
    println!("{}", paint(style_for(line.tone), &line.text));
}
