use clap::{Parser, Subcommand};

/// Command-line interface definition for pancheck
#[derive(Parser)]
#[command(
    name = "pancheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read PAN working-time month files and check them against labor-time rules",
    long_about = None
)]
pub struct Cli {
    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Check a month file for rule violations
    Check {
        /// PAN settings file (default: from config, usually ~/pan.xml)
        #[arg(long = "panconf", value_name = "FILE")]
        panconf: Option<String>,

        /// PAN month file to check
        #[arg(long = "xmlmonth", value_name = "FILE")]
        xmlmonth: Option<String>,

        /// Print the result as JSON instead of text
        #[arg(long, requires = "xmlmonth")]
        json: bool,
    },

    /// Show the days of a month file as a table
    Show {
        /// PAN month file to show
        #[arg(long = "xmlmonth", value_name = "FILE")]
        xmlmonth: String,
    },
}
