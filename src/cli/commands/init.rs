use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates `~/.pancheck/pancheck.conf` with default values unless it
/// already exists. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let existed = Config::config_file().exists();
    let path = Config::init_all(cli.test)?;

    if existed {
        info(format!("Config file already present: {}", path.display()));
    } else if cli.test {
        info(format!("Test mode, config file not written: {}", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    tracing::debug!(path = %path.display(), test = cli.test, "init done");
    Ok(())
}
