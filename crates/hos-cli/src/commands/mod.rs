//! CLI subcommand implementations.

pub mod assemble;
pub mod browse;
pub mod sheets;
pub mod show;
pub mod util;
