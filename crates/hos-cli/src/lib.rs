//! Daily log sheet CLI library.
//!
//! This crate provides the CLI interface for the duty-status log engine.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, TripArg};
pub use config::{Config, OutputFormat};
