use clap::{Parser, Subcommand};

/// Command-line interface definition for ttrack
#[derive(Parser)]
#[command(
    name = "ttrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time spent on projects: start/stop timers, CSV log, daily reports",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding config, log and session files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Override the lock file location
    #[arg(global = true, long = "lock-file", value_name = "FILE")]
    pub lock_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, configuration and log file
    Init,

    /// Start a timer for a project
    Start {
        /// Project code to track, e.g. "ACME-142" or "emails"
        project: String,
    },

    /// Stop the running timer and append the entry to the log
    Stop,

    /// Discard the running timer without logging anything
    Cancel {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the running timer, if any
    Status,

    /// List the most recently used project codes
    Recent {
        /// Maximum number of projects to list (defaults to the configured value)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Generate the aggregated time report
    Report {
        /// Also print the rendered report to stdout
        #[arg(long)]
        print: bool,

        /// Open the generated report with the default application
        #[arg(long)]
        open: bool,
    },

    /// Print the time log as a table
    Log {
        /// Open the log file for manual editing instead of printing it
        #[arg(long)]
        open: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },
}
