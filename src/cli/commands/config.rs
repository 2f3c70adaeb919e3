use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- CHECK / MIGRATE ----
        if (*check || *do_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {} (run `pancheck init`)",
                path.display()
            ));
        } else {
            if *check {
                let missing = migrate::missing_fields(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `pancheck config --migrate` to add them");
                }
            }
            if *do_migrate && !migrate::migrate(&path)? {
                info("Configuration already up to date");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
