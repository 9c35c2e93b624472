use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::store::{DirStore, FixtureStore};
use crate::validator::{validate_file, ValidateOptions};

#[derive(Parser, Debug)]
#[command(name = "check-mock-data")]
#[command(about = "Verify mock data structure and compatibility")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CheckCli {
    /// Mock data file to check
    #[arg(value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,
    /// Fail when a task's status is not listed under its stage
    #[arg(long)]
    pub strict: bool,
}

/// Entry point for the `check-mock-data` binary. Returns the exit code.
///
/// Exit code is 0 when the file passes and 1 on any failure, including
/// argument errors.
pub fn run_check() -> Result<i32> {
    run_check_from(std::env::args_os())
}

pub fn run_check_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match CheckCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            return Ok(code);
        }
    };
    let store = DirStore::current_dir().context("Failed to read current directory")?;
    let config = Config::resolve(store.root()).context("Failed to load configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_check(&cli, &config, &store, &mut out)
}

pub fn execute_check(
    cli: &CheckCli,
    config: &Config,
    store: &dyn FixtureStore,
    out: &mut dyn Write,
) -> Result<i32> {
    let Some(file) = &cli.file else {
        writeln!(out, "Usage: check-mock-data <file_path>")?;
        writeln!(out, "Example: check-mock-data sample_tasks_mock.json")?;
        return Ok(1);
    };
    let options = ValidateOptions { strict: cli.strict || config.strict };

    if validate_file(store, file, options, out)? {
        writeln!(out)?;
        writeln!(out, "🎉 All tests passed! The mock data structure is valid.")?;
        Ok(0)
    } else {
        writeln!(out)?;
        writeln!(out, "❌ Tests failed! Please check the mock data structure.")?;
        Ok(1)
    }
}
