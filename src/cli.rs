use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::todo::TodoEntry;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal todo table", long_about = None)]
pub struct Cli {
    /// Append log output to this file (logging is off without it)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Print the final list as JSON after leaving the UI
    #[arg(long)]
    pub print_on_exit: bool,

    /// Input poll interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}

/// Installs env_logger writing to `--log-file`. The terminal is owned by the
/// UI, so nothing is logged when no file is given.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

/// Writes the entries as pretty JSON followed by a newline.
pub fn export_json<W: Write>(entries: &[TodoEntry], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, entries).context("failed to serialise todos")?;
    writeln!(out)?;
    Ok(())
}
