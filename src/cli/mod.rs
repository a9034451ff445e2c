use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "eqlaw",
    about = "Checks that an equality relation honours the equivalence contract",
    version,
    author,
    long_about = None
)]
pub struct EqlawCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to a YAML file with verifier options
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify a relation table against the equality contract
    Check {
        /// Path to the relation file (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        relation: PathBuf,

        /// Calls per pair for the consistency law (overrides the config file)
        #[arg(long)]
        repeats: Option<usize>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file without asking
        #[arg(short, long, default_value = "false")]
        force: bool,

        /// Exit with an error when any law is violated
        #[arg(long, default_value = "false")]
        strict: bool,
    },

    /// List the laws and what each one requires
    Laws,
}
