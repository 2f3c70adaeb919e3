//! pancheck library root.
//! Exposes the data model, the rule-checking engine, the PAN file readers,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod pan;
pub mod ui;
pub mod utils;

pub use crate::core::{DayReport, MonthReport, validate_day, validate_month};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to the commands
    let cfg = Config::load()?;

    ui::messages::set_color(cfg.color && !cli.no_color);
    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
