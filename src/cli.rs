use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "screenpos",
    about = "Pick a screen position from a keyboard-driven grid overlay and print it"
)]
pub struct Cli {
    /// JSON configuration document; built-in defaults are used when absent.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (`RUST_LOG` is honoured in this mode).
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}
