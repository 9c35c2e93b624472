// Writes man pages for both binaries.
//
// Usage: generate-man [OUT_DIR]   (default: ./man)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_mangen::Man;
use mockdata::cli::{CheckCli, SwitchCli};

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    for cmd in [SwitchCli::command(), CheckCli::command()] {
        let path = out_dir.join(format!("{}.1", cmd.get_name()));
        let mut buffer = Vec::new();
        Man::new(cmd).render(&mut buffer)?;
        fs::write(&path, buffer)
            .with_context(|| format!("Failed to write man page: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
