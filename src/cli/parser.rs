use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rBillsheet
#[derive(Parser)]
#[command(
    name = "rbillsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reshape time-tracking exports into per-day billing summaries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// More diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration file in use: `--config` or the platform default.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => crate::config::Config::config_file(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (print, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,

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

    /// List the configured handler codes
    Codes,

    /// Transform an export and write the billing summary
    Transform {
        /// Input file (.csv with ';' separator, or .xlsx/.xls/.ods)
        input: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: Transformed_Data.<ext> next to the input)"
        )]
        file: Option<String>,

        #[arg(
            long,
            value_enum,
            help = "Output format (default: from --file extension, then config)"
        )]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "NAME", help = "Worksheet to read (default: first)")]
        sheet: Option<String>,

        #[arg(long, help = "Also print the result as a table")]
        preview: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Transform an export and print the result without writing a file
    Preview {
        /// Input file (.csv with ';' separator, or .xlsx/.xls/.ods)
        input: String,

        #[arg(long, value_name = "NAME", help = "Worksheet to read (default: first)")]
        sheet: Option<String>,

        #[arg(long, short = 'n', value_name = "ROWS", help = "Show at most ROWS rows")]
        limit: Option<usize>,
    },
}
