use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{report, validate_month};
use crate::errors::{AppError, AppResult};
use crate::pan;
use crate::ui::messages::{header, info, report_line, warning};
use crate::utils::date::month_title;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `check` command
///
/// - with `--xmlmonth`: validate the month file and print every finding
/// - without: print who the PAN settings belong to
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        panconf,
        xmlmonth,
        json,
    } = cmd
    {
        match xmlmonth {
            Some(file) => check_month_file(&expand_tilde(file), *json)?,
            None => print_settings(panconf.as_deref(), cfg)?,
        }
    }
    Ok(())
}

fn check_month_file(path: &Path, json: bool) -> AppResult<()> {
    let month = pan::read_month_file(path)?;
    let result = validate_month(&month);

    tracing::info!(
        path = %path.display(),
        work_days = result.days.len(),
        fails = result.fails(),
        "month checked"
    );

    if json {
        println!("{}", report::to_json(&result)?);
        return Ok(());
    }

    header("Check");
    println!("{}", path.display());
    if let Some(title) = month_title(result.month, result.year) {
        println!("{}", title);
    }

    for line in report::month_lines(&result) {
        report_line(&line);
    }

    println!("{}", report::SEPARATOR);
    println!("{}", report::totals_line(&result));
    report_line(&report::summary_line(&result));

    Ok(())
}

fn print_settings(panconf: Option<&str>, cfg: &Config) -> AppResult<()> {
    let path = panconf
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.pan_config_path());

    header("Check");

    let settings = match pan::read_settings(&path) {
        Ok(s) => s,
        Err(AppError::SettingsNotFound(p)) => {
            warning(format!(
                "No PAN settings file found: {}\nPlease start the PAN application once to create it.",
                p.display()
            ));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match &settings.fullname {
        Some(name) => println!("{}", name),
        None => warning("The PAN settings file has no user name"),
    }
    if let Some(dep) = &settings.department {
        println!("{}", dep);
    }
    if let Some(dir) = &settings.schedule_dir {
        info(format!("Month files: {}", dir.display()));
    }
    info("Pass --xmlmonth <FILE> to check a month file");

    Ok(())
}
