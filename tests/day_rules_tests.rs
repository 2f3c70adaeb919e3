mod common;
use chrono::TimeDelta;
use common::{block, day, t, work_day};
use pancheck::core::report::{Tone, day_lines};
use pancheck::core::rules::{Rule, Severity};
use pancheck::errors::AppError;
use pancheck::models::{DayType, TimeBlock, WorkDay};
use pancheck::validate_day;

fn minutes(m: i64) -> TimeDelta {
    TimeDelta::minutes(m)
}

fn rules_of(report: &pancheck::DayReport) -> Vec<Rule> {
    report.findings.iter().map(|f| f.rule.clone()).collect()
}

#[test]
fn regular_day_has_no_findings() {
    let d = work_day(&[("08:00", "12:00"), ("13:00", "17:00")]);
    let report = validate_day(1, &d);

    assert_eq!(report.worked, TimeDelta::hours(8));
    assert_eq!(report.pause, Some(TimeDelta::hours(1)));
    assert_eq!(report.home_office, TimeDelta::zero());
    assert!(report.findings.is_empty());
    assert_eq!(report.fails(), 0);
}

#[test]
fn short_pause_on_nine_hour_day_uses_30_minutes() {
    // 5h + 4h = 9h00, pause 29 min
    let d = work_day(&[("07:00", "12:00"), ("12:29", "16:29")]);
    let report = validate_day(3, &d);

    assert_eq!(report.worked, TimeDelta::hours(9));
    assert_eq!(
        rules_of(&report),
        vec![Rule::MinPause {
            pause: minutes(29),
            required: minutes(30),
        }]
    );
    assert_eq!(report.fails(), 1);

    // exactly 30 min is enough at 9h00
    let d = work_day(&[("07:00", "12:00"), ("12:30", "16:30")]);
    assert_eq!(validate_day(3, &d).fails(), 0);
}

#[test]
fn pause_threshold_shifts_to_45_minutes_above_nine_hours() {
    // 5h + 4h01 = 9h01, pause 30 min
    let d = work_day(&[("07:00", "12:00"), ("12:30", "16:31")]);
    let report = validate_day(4, &d);

    assert_eq!(report.worked, minutes(9 * 60 + 1));
    assert_eq!(
        rules_of(&report),
        vec![Rule::MinPause {
            pause: minutes(30),
            required: minutes(45),
        }]
    );

    let d = work_day(&[("07:00", "12:00"), ("12:45", "16:46")]);
    assert_eq!(validate_day(4, &d).fails(), 0);
}

#[test]
fn long_day_with_half_hour_pause_is_flagged() {
    // 4h + 5h30 = 9h30, pause 30 min
    let d = work_day(&[("08:00", "12:00"), ("12:30", "18:00")]);
    let report = validate_day(6, &d);

    assert_eq!(report.worked, minutes(9 * 60 + 30));
    assert_eq!(report.pause, Some(minutes(30)));
    assert_eq!(report.fails(), 1);
    assert!(matches!(
        report.findings[0].rule,
        Rule::MinPause { required, .. } if required == minutes(45)
    ));
}

#[test]
fn ten_hours_is_allowed_one_more_minute_is_not() {
    let d = work_day(&[("07:00", "12:00"), ("12:45", "17:45")]);
    let report = validate_day(7, &d);
    assert_eq!(report.worked, TimeDelta::hours(10));
    assert_eq!(report.fails(), 0);

    let d = work_day(&[("07:00", "12:00"), ("12:45", "17:46")]);
    let report = validate_day(7, &d);
    assert_eq!(
        rules_of(&report),
        vec![Rule::MaxDailyWorktime {
            worked: minutes(10 * 60 + 1),
        }]
    );
    assert_eq!(report.fails(), 1);
}

#[test]
fn late_start_is_advisory_only() {
    // 2h30 + 5h30 = 8h, pause 30 min, starts after 09:00
    let d = work_day(&[("09:30", "12:00"), ("12:30", "18:00")]);
    let report = validate_day(8, &d);

    assert_eq!(report.worked, TimeDelta::hours(8));
    assert_eq!(
        rules_of(&report),
        vec![Rule::ServiceTime {
            begin: t("09:30"),
            end: t("18:00"),
        }]
    );
    assert_eq!(report.findings[0].severity, Severity::Advisory);
    assert_eq!(report.fails(), 0);
}

#[test]
fn early_end_is_advisory_only() {
    let d = work_day(&[("07:00", "10:00"), ("10:30", "14:59")]);
    let report = validate_day(9, &d);

    assert!(matches!(report.findings[..], [ref f] if matches!(f.rule, Rule::ServiceTime { .. })));
    assert_eq!(report.fails(), 0);
}

#[test]
fn home_office_without_fraction_counts_full_day() {
    let d = day(
        DayType::Work,
        Some("Homeoffice"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert_eq!(d.home_office_time(), TimeDelta::hours(8));
    assert_eq!(validate_day(10, &d).fails(), 0);
}

#[test]
fn home_office_fraction_scales_worked_time() {
    let d = day(
        DayType::Work,
        Some("0.5 Homeoffice"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert_eq!(d.home_office_fraction(), 0.5);
    assert_eq!(d.home_office_time(), TimeDelta::hours(4));

    let d = day(
        DayType::Work,
        Some("0.25 homeOFFICE nachmittags"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert_eq!(d.home_office_time(), TimeDelta::hours(2));
}

#[test]
fn out_of_range_fraction_counts_whole_day_with_diagnostic() {
    let d = day(
        DayType::Work,
        Some("1000000000000.0 Homeoffice"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert!(d.has_invalid_fraction());
    assert_eq!(d.home_office_fraction(), 1.0);
    assert_eq!(d.home_office_time(), TimeDelta::hours(8));

    let report = validate_day(17, &d);
    assert_eq!(report.home_office, TimeDelta::hours(8));
    assert_eq!(rules_of(&report), vec![Rule::InvalidHomeOfficeFraction]);
    assert_eq!(report.findings[0].severity, Severity::Diagnostic);
    assert_eq!(report.fails(), 0);
    assert_eq!(
        day_lines(&report)[0].text,
        "? 17. home office fraction out of range, whole day counted"
    );

    // above 1.0 is just as invalid, and still subject to the 8h limit
    let d = day(
        DayType::Work,
        Some("1.5 Homeoffice"),
        &[("07:00", "12:00"), ("12:45", "16:45")],
    );
    let report = validate_day(18, &d);
    assert_eq!(report.home_office, TimeDelta::hours(9));
    assert_eq!(
        rules_of(&report),
        vec![
            Rule::InvalidHomeOfficeFraction,
            Rule::MaxHomeOfficeDay {
                home_office: TimeDelta::hours(9),
            },
        ]
    );
    assert_eq!(report.fails(), 1);

    // 1.0 itself is fine
    let d = day(
        DayType::Work,
        Some("1.0 Homeoffice"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert!(!d.has_invalid_fraction());
    assert!(validate_day(19, &d).findings.is_empty());
}

#[test]
fn service_time_boundaries_are_inclusive() {
    assert_eq!(pancheck::core::rules::SERVICE_BEGIN, t("09:00"));
    assert_eq!(pancheck::core::rules::SERVICE_END, t("15:00"));

    // 3h + 2h30 = 5h30, pause 30 min, exactly 09:00 to 15:00
    let d = work_day(&[("09:00", "12:00"), ("12:30", "15:00")]);
    assert!(validate_day(20, &d).findings.is_empty());

    let d = work_day(&[("09:01", "12:00"), ("12:30", "15:00")]);
    assert!(matches!(
        rules_of(&validate_day(20, &d))[..],
        [Rule::ServiceTime { .. }]
    ));
}

#[test]
fn fraction_without_home_office_marker_is_ignored() {
    let d = day(
        DayType::Work,
        Some("0.5 Kundentermin"),
        &[("08:00", "12:00"), ("12:30", "16:30")],
    );
    assert!(!d.is_home_office());
    assert_eq!(d.home_office_time(), TimeDelta::zero());

    let d = work_day(&[("08:00", "12:00"), ("12:30", "16:30")]);
    assert_eq!(d.home_office_time(), TimeDelta::zero());
}

#[test]
fn half_home_office_on_ten_hour_day_passes() {
    let d = day(
        DayType::Work,
        Some("0.5 Homeoffice"),
        &[("07:00", "12:00"), ("12:45", "17:45")],
    );
    let report = validate_day(11, &d);

    assert_eq!(report.worked, TimeDelta::hours(10));
    assert_eq!(report.home_office, TimeDelta::hours(5));
    assert!(report.findings.is_empty());
}

#[test]
fn full_home_office_above_eight_hours_is_flagged() {
    // 5h + 4h = 9h, pause 45 min
    let d = day(
        DayType::Work,
        Some("Homeoffice"),
        &[("07:00", "12:00"), ("12:45", "16:45")],
    );
    let report = validate_day(12, &d);

    assert_eq!(
        rules_of(&report),
        vec![Rule::MaxHomeOfficeDay {
            home_office: TimeDelta::hours(9),
        }]
    );
    assert_eq!(report.fails(), 1);
}

#[test]
fn pause_sums_all_gaps_of_four_blocks() {
    let d = work_day(&[
        ("07:00", "09:00"),
        ("09:15", "11:00"),
        ("11:10", "13:00"),
        ("13:05", "16:00"),
    ]);
    assert_eq!(d.pause_time(), Some(minutes(30)));

    let report = validate_day(13, &d);
    assert_eq!(report.worked, minutes(8 * 60 + 30));
    assert_eq!(report.fails(), 0);
}

#[test]
fn day_without_blocks_is_skipped_with_diagnostic() {
    let d = work_day(&[]);
    let report = validate_day(14, &d);

    assert!(report.skipped());
    assert_eq!(rules_of(&report), vec![Rule::NoTimeBlocks]);
    assert_eq!(report.findings[0].severity, Severity::Diagnostic);
    assert_eq!(report.worked, TimeDelta::zero());
    assert_eq!(report.fails(), 0);
}

#[test]
fn single_block_skips_pause_rule_only() {
    let d = work_day(&[("08:00", "15:00")]);
    let report = validate_day(15, &d);

    assert_eq!(report.pause, None);
    assert_eq!(report.worked, TimeDelta::hours(7));
    assert_eq!(rules_of(&report), vec![Rule::PauseUndetermined]);
    assert_eq!(report.fails(), 0);

    let d = work_day(&[("07:00", "18:00")]);
    let report = validate_day(15, &d);
    assert_eq!(
        rules_of(&report),
        vec![
            Rule::MaxDailyWorktime {
                worked: TimeDelta::hours(11),
            },
            Rule::PauseUndetermined,
        ]
    );
    assert_eq!(report.fails(), 1);
}

#[test]
fn overlapping_blocks_never_produce_negative_pause() {
    let d = work_day(&[("08:00", "12:00"), ("11:00", "16:00")]);
    assert_eq!(d.pause_time(), Some(TimeDelta::zero()));

    let report = validate_day(16, &d);
    assert_eq!(
        rules_of(&report),
        vec![
            Rule::OverlappingBlocks { block: 2 },
            Rule::MinPause {
                pause: TimeDelta::zero(),
                required: minutes(30),
            },
        ]
    );
    assert_eq!(report.fails(), 1);
}

#[test]
fn invalid_blocks_are_rejected_at_construction() {
    assert!(matches!(
        TimeBlock::new(t("12:00"), t("08:00")),
        Err(AppError::InvalidBlock { .. })
    ));

    let five = vec![block("07:00", "08:00"); 5];
    assert!(matches!(
        WorkDay::new(DayType::Work, None, five),
        Err(AppError::TooManyBlocks(5))
    ));
}

#[test]
fn lines_carry_two_digit_day_and_prefixes() {
    let d = work_day(&[("09:30", "12:00"), ("12:20", "18:00")]);
    let report = validate_day(5, &d);
    let lines = day_lines(&report);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "05. min. pause time not reached (00:20 < 00:30)");
    assert_eq!(lines[0].tone, Tone::Hard);
    assert_eq!(
        lines[1].text,
        "! 05. service time possibly not covered (09:30 - 18:00)"
    );
    assert_eq!(lines[1].tone, Tone::Advisory);
}
