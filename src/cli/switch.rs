use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;

use crate::config::Config;
use crate::store::{DirStore, FixtureStore};
use crate::switcher::{backup_current, list_available, switch};

#[derive(Parser, Debug)]
#[command(name = "switch-mock-data")]
#[command(about = "Switch mock data files for the task management app")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SwitchCli {
    /// Source mock data file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["list", "backup"])]
    pub source: Option<PathBuf>,
    /// Target file (default: updated_mock_tasks.json)
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,
    /// List available mock data files
    #[arg(long, conflicts_with = "backup")]
    pub list: bool,
    /// Create backup of current data
    #[arg(long)]
    pub backup: bool,
}

const USAGE: &str = "Available commands:
  --list: List available mock data files
  --backup: Create backup of current data
  --source <file>: Switch to specified mock data file

Example:
  switch-mock-data --source sample_tasks_mock.json
  switch-mock-data --list
";

/// Entry point for the `switch-mock-data` binary. Returns the exit code.
pub fn run_switch() -> Result<i32> {
    let cli = match SwitchCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(e.exit_code());
        }
    };
    let mut store = DirStore::current_dir().context("Failed to read current directory")?;
    let config = Config::resolve(store.root()).context("Failed to load configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_switch(&cli, &config, &mut store, &Local::now().naive_local(), &mut out)
}

/// Run the action selected by `cli`.
///
/// Exit code is 0 when the action completed and 1 when a switch failed.
pub fn execute_switch(
    cli: &SwitchCli,
    config: &Config,
    store: &mut dyn FixtureStore,
    now: &NaiveDateTime,
    out: &mut dyn Write,
) -> Result<i32> {
    let target = cli.target.clone().unwrap_or_else(|| config.target_or_default());

    if cli.list {
        list_available(store, out)?;
    } else if cli.backup {
        backup_current(store, &target, now, out)?;
    } else if let Some(source) = &cli.source {
        if !switch(store, source, &target, now, out)? {
            return Ok(1);
        }
    } else {
        write!(out, "{}", USAGE)?;
    }
    Ok(0)
}
