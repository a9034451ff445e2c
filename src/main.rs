use anyhow::{ Context, Result };
use clap::Parser;
use log::info;

use eqlaw::VerifierOptions;

mod cli;
use cli::{ EqlawCli, Commands };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = EqlawCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    run(&cli)
}

fn run(cli: &EqlawCli) -> Result<()> {
    match &cli.command {
        Commands::Check { relation, repeats, output, force, strict } => {
            let mut options = match &cli.config {
                Some(path) =>
                    VerifierOptions::from_file(path).with_context(||
                        format!("Failed to load config {}", path.display())
                    )?,
                None => VerifierOptions::default(),
            };
            if let Some(repeats) = repeats {
                options.repeats = *repeats;
            }

            cli::commands::check::execute(
                relation,
                options,
                &cli.output_format,
                output.as_deref(),
                *force,
                *strict
            )
        }

        Commands::Laws => cli::commands::laws::execute(),
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
