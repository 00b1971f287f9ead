//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Driver's daily log viewer.
///
/// Reads a planned trip's duty-status events and shows each day as the
/// 24-hour, quarter-hour grid of a daily log sheet with its recap totals.
#[derive(Debug, Parser)]
#[command(name = "hos", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the trip's daily sheets with their totals.
    Sheets {
        #[command(flatten)]
        trip: TripArg,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one daily log sheet.
    Show {
        #[command(flatten)]
        trip: TripArg,

        /// Sheet number, starting at 1.
        #[arg(long, conflicts_with = "date")]
        sheet: Option<usize>,

        /// Sheet date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Step through sheets interactively, reading commands from stdin.
    ///
    /// Commands: n (next), p (prev), g <sheet>, d <date>, q (quit).
    Browse {
        #[command(flatten)]
        trip: TripArg,
    },

    /// Split a flat event list at midnight and group it into daily sheets.
    ///
    /// Prints a trip document with one sheet per UTC date.
    Assemble {
        /// JSON file containing an array of events.
        events: PathBuf,
    },
}

/// Trip document argument shared by sheet commands.
#[derive(Debug, Args)]
pub struct TripArg {
    /// Trip JSON file. Defaults to `trip_path` from the config.
    pub file: Option<PathBuf>,
}
