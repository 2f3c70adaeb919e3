#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveTime;
use pancheck::models::{DayType, TimeBlock, WorkDay};
use std::env;
use std::fs;
use std::path::PathBuf;

/// pancheck binary with HOME pointed at an empty per-test directory,
/// so a real user configuration never leaks into the tests.
pub fn pck(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("pancheck");
    cmd.env("HOME", temp_home(name)).env_remove("RUST_LOG");
    cmd
}

/// Create (or reset) an empty directory inside the system temp dir
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pancheck_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Write a fixture file inside the system temp dir and return its path
pub fn write_fixture(name: &str, content: &[u8]) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pancheck.xml", name));
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn t(hhmm: &str) -> NaiveTime {
    NaiveTime::parse_from_str(hhmm, "%H:%M").expect("valid HH:MM")
}

pub fn block(begin: &str, end: &str) -> TimeBlock {
    TimeBlock::new(t(begin), t(end)).expect("valid block")
}

pub fn day(day_type: DayType, description: Option<&str>, blocks: &[(&str, &str)]) -> WorkDay {
    WorkDay::new(
        day_type,
        description.map(str::to_string),
        blocks.iter().map(|(b, e)| block(b, e)).collect(),
    )
    .expect("valid day")
}

pub fn work_day(blocks: &[(&str, &str)]) -> WorkDay {
    day(DayType::Work, None, blocks)
}

/// One `<Tag>` element of a PAN month file
pub fn tag(num: u32, day_type: &str, note: &str, ranges: [&str; 4]) -> String {
    format!(
        "  <Tag>\n    <Datum>{num}</Datum>\n    <TagesTyp>{day_type}</TagesTyp>\n    <Bemerkung>{note}</Bemerkung>\n    <Vormittag>{}</Vormittag>\n    <Nachmittag>{}</Nachmittag>\n    <Dritte>{}</Dritte>\n    <Vierte>{}</Vierte>\n  </Tag>\n",
        ranges[0], ranges[1], ranges[2], ranges[3]
    )
}

/// A complete PAN month file around the given `<Tag>` elements
pub fn month_xml(extended: bool, tags: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Monatsdaten>\n  <Monat>3</Monat>\n  <Jahr>2024</Jahr>\n  <SollStunden>160</SollStunden>\n  <Erweitert>{}</Erweitert>\n{}</Monatsdaten>\n",
        extended,
        tags.concat()
    )
}

/// A small March 2024 month: one clean day, one short pause, one weekend
/// day and one overtime compensation day.
pub fn sample_month_xml() -> String {
    month_xml(
        false,
        &[
            tag(1, "Arbeitstag", "", ["08:00 - 12:00", "13:00 - 17:00", "", ""]),
            tag(2, "Wochenende", "", ["", "", "", ""]),
            tag(
                4,
                "Arbeitstag",
                "0.5 Homeoffice",
                ["08:00 - 12:00", "12:30 - 18:00", "", ""],
            ),
            tag(5, "Überstunden genommen", "", ["", "", "", ""]),
        ],
    )
}

pub fn settings_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
<properties>
<comment>PAN</comment>
<entry key="verzeichnis">/data/zeiten</entry>
<entry key="username">Erika Mustermann</entry>
<entry key="abteilung">IT-Betrieb</entry>
<entry key="uid">emuster</entry>
<entry key="fenster">800x600</entry>
</properties>
"#
    .to_string()
}
