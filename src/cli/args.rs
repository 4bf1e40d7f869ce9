//! Command-line argument parsing for the tasklist wrapper
use clap::{Parser, ValueEnum};

use crate::core::field::{FieldFormat, DEFAULT_MAX_LEN};
use crate::formats::traits::OutputFormat;
use crate::options::Options;

#[derive(Parser, Debug)]
#[command(name = "win-tasklist")]
#[command(about = "List running Windows processes through tasklist.exe", long_about = None)]
#[command(after_help = "Example\n  $ win-tasklist\n  $ win-tasklist --svc --format json\n  $ win-tasklist -f \"imagename eq explorer.exe\"")]
pub struct Cli {
    /// Include status, user name, CPU time and window title
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the services hosted in each process
    #[arg(long = "svc", alias = "services")]
    pub services: bool,

    /// Show loaded modules; optionally only processes using module NAME
    #[arg(short, long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    pub modules: Option<String>,

    /// Show Store apps and their package names
    #[arg(long)]
    pub apps: bool,

    /// Remote system to query
    #[arg(short, long, value_name = "HOST")]
    pub system: Option<String>,

    /// User name for the remote system
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the remote system
    #[arg(short, long)]
    pub password: Option<String>,

    /// tasklist filter, e.g. "imagename eq svchost.exe" (repeatable)
    #[arg(short, long = "filter", value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,

    /// Truncate field values longer than N characters
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_LEN)]
    pub width: usize,

    /// Drop the " ..." marker from truncated values
    #[arg(long)]
    pub no_ellipsis: bool,

    /// List the column layouts and exit
    #[arg(long)]
    pub list_schemas: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
    Jsonl,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl Cli {
    /// Query options for this invocation.
    pub fn options(&self) -> Options {
        Options {
            verbose: self.verbose,
            services: self.services,
            modules: self.modules.clone(),
            apps: self.apps,
            output_mode: OutputFormat::from(self.format).mode(),
            filters: self.filters.clone(),
            system: self.system.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            field_format: FieldFormat {
                max_len: self.width,
                ellipsis: !self.no_ellipsis,
            },
        }
    }
}
