use crate::export::ExportFormat;
use crate::models::theme::Theme;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rtattendance
/// CLI application to track meeting attendance with CSV files
#[derive(Parser)]
#[command(
    name = "rtattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: sign members in and out, accumulate hours and track credit in CSV files",
    long_about = None
)]
pub struct Cli {
    /// Workspace directory holding config, roster, ledger and session files
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// `--background` values accepted by `init`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Background {
    Light,
    Dark,
}

impl From<Background> for Theme {
    fn from(b: Background) -> Self {
        match b {
            Background::Light => Theme::Light,
            Background::Dark => Theme::Dark,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workspace (config file and empty member list)
    Init {
        #[arg(long = "background", value_enum, help = "Terminal background: light or dark")]
        background: Background,

        #[arg(
            long = "required-hours",
            default_value_t = 2.0,
            help = "Hours a member must attend to earn credit"
        )]
        required_hours: f64,

        #[arg(
            long = "new-member-grade",
            default_value_t = 9,
            help = "Grade that marks new members (sorted last)"
        )]
        new_member_grade: i64,
    },

    /// Run an attendance session: read IDs from standard input until 'quit' or end of input
    Start,

    /// Print the sorted member list
    Members,

    /// Print the output ledger
    Ledger {
        #[arg(long = "totals", help = "Append the number of credited sessions per member")]
        totals: bool,
    },

    /// Print the session tables saved on a day
    Report {
        /// Day to show (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Print the session logs of a day
    Log {
        /// Day to show (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or unknown keys")]
        check: bool,

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

    /// Export the output ledger
    Export {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long = "range",
            help = "Keep sessions in YYYY, YYYY-MM, YYYY-MM-DD or START:END (same shape)"
        )]
        range: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Archive the workspace data into a .zip or .tar.gz file
    Backup {
        #[arg(long = "file", help = "Destination archive (.zip, .tar.gz or .tgz)")]
        file: String,

        #[arg(long = "force", help = "Overwrite an existing archive")]
        force: bool,
    },
}
