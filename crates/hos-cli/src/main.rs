use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hos_cli::commands::{assemble, browse, sheets, show, util};
use hos_cli::{Cli, Commands, Config, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let wants_json = |flag: bool| flag || config.output == OutputFormat::Json;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Sheets { trip, json }) => {
            let trip = util::open_trip(trip.file.as_deref(), &config)?;
            sheets::run(&mut out, &trip, wants_json(*json))?;
        }
        Some(Commands::Show {
            trip,
            sheet,
            date,
            json,
        }) => {
            let trip = util::open_trip(trip.file.as_deref(), &config)?;
            let selection = show::Selection::from_args(*sheet, *date);
            show::run(&mut out, trip, selection, wants_json(*json), &config)?;
        }
        Some(Commands::Browse { trip }) => {
            let trip = util::open_trip(trip.file.as_deref(), &config)?;
            browse::run(io::stdin().lock(), &mut out, trip, &config)?;
        }
        Some(Commands::Assemble { events }) => {
            assemble::run(&mut out, events)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    out.flush()?;
    Ok(())
}
