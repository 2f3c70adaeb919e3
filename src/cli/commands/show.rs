use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::WorkMonth;
use crate::pan;
use crate::ui::messages::{header, warning};
use crate::utils::date::month_title;
use crate::utils::formatting::describe_blocks;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;

/// Handle the `show` command: one table row per day of the file.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Show { xmlmonth } = cmd {
        let path = expand_tilde(xmlmonth);
        let month = pan::read_month_file(&path)?;

        header("Month");
        println!("{}", path.display());
        if let Some(title) = month_title(month.month(), month.year()) {
            println!("{}", title);
        }

        if month.is_empty() {
            warning("No days in month file");
            return Ok(());
        }

        print!("{}", render(&month));
    }
    Ok(())
}

fn render(month: &WorkMonth) -> String {
    let mut table = Table::new(vec![
        Column::new("Day"),
        Column::new("Type"),
        Column::new("Blocks"),
        Column::new("Worked"),
        Column::new("Pause"),
        Column::new("Home office"),
        Column::new("Description"),
    ]);

    for (num, day) in month.days() {
        let pause = day
            .pause_time()
            .map(format_duration)
            .unwrap_or_else(|| "--:--".to_string());

        table.add_row(vec![
            format!("{:02}.", num),
            day.day_type().to_string(),
            describe_blocks(day),
            format_duration(day.working_time()),
            pause,
            format_duration(day.home_office_time()),
            day.description().unwrap_or("").to_string(),
        ]);
    }

    table.render()
}
