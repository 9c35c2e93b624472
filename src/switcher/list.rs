use std::io::Write;

use log::debug;

use crate::error::{MockDataError, Result};
use crate::store::FixtureStore;

/// Does a file name look like a mock data fixture?
pub fn is_mock_file(name: &str) -> bool {
    name.ends_with(".json") && name.to_lowercase().contains("mock")
}

/// Print a 1-indexed listing of the mock data files in the working directory.
///
/// Order is whatever the store enumerates; nothing is sorted.
pub fn list_available(store: &dyn FixtureStore, out: &mut dyn Write) -> Result<Vec<String>> {
    let files: Vec<String> = store
        .list()
        .map_err(|e| MockDataError::io(".", e))?
        .into_iter()
        .filter(|name| is_mock_file(name))
        .collect();
    debug!("Found {} mock data files", files.len());

    writeln!(out, "Available mock data files:")?;
    for (i, file) in files.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, file)?;
    }
    Ok(files)
}
