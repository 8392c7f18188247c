use crate::core::pagination::PAGE_SIZES;
use crate::utils::date::parse_date_arg;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetracker
/// Terminal client for a remote time-tracking API
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal time tracker: start/end your workday and breaks, browse your history",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (otherwise RTIMETRACKER_API_URL or the config file)
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the storage file holding the session token (useful for tests)
    #[arg(global = true, long = "storage", value_name = "FILE")]
    pub storage: Option<String>,

    /// Log at debug level
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and open the dashboard
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Change the account password
    Passwd {
        /// Current password (prompted when omitted)
        #[arg(long = "current")]
        current: Option<String>,

        /// New password (prompted when omitted)
        #[arg(long = "new")]
        new: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show current status and a page of past workdays
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number (starts at 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page: Option<u32>,

        /// Show the filter panel
        #[arg(long)]
        filters: bool,
    },

    /// Start the workday
    Start,

    /// End the workday
    End,

    /// Start a break
    #[command(name = "break-start")]
    BreakStart,

    /// End the current break
    #[command(name = "break-end")]
    BreakEnd,

    /// Interactive dashboard with a live clock
    Shell {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only workdays on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Only workdays on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Entries per page: 10, 20 or 50
    #[arg(long, value_parser = parse_page_size)]
    pub limit: Option<u32>,
}

fn parse_page_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if PAGE_SIZES.contains(&n) {
        Ok(n)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZES))
    }
}
