//! Data switcher: swap a mock data fixture into place.
//!
//! The switch validates the source before touching anything, backs up the
//! existing target, copies the source over it, and prints a summary of the
//! new data.

pub mod backup;
pub mod list;

pub use backup::backup_current;
pub use list::{is_mock_file, list_available};

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::error::{MockDataError, Result};
use crate::models::Document;
use crate::store::FixtureStore;
use crate::summary::DataSummary;

/// Target file the application reads its mock data from.
pub const DEFAULT_TARGET: &str = "updated_mock_tasks.json";

/// What a successful switch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub backup: Option<PathBuf>,
    pub summary: DataSummary,
}

/// Copy `source` over `target`, backing up the target first when it exists.
///
/// Every failure is printed to `out` and reported as `false`; the only error
/// returned is a failure to write to `out` itself. Nothing is written to
/// `target` unless the source exists and has a `tasks` array.
pub fn switch(
    store: &mut dyn FixtureStore,
    source: &Path,
    target: &Path,
    now: &NaiveDateTime,
    out: &mut dyn Write,
) -> io::Result<bool> {
    match try_switch(store, source, target, now, out) {
        Ok(_) => Ok(true),
        Err(MockDataError::Output(e)) => Err(e),
        Err(e) => {
            info!("Switch from {} failed: {}", source.display(), e);
            writeln!(out, "Error: {}", e)?;
            Ok(false)
        }
    }
}

/// Fallible core of [`switch`].
pub fn try_switch(
    store: &mut dyn FixtureStore,
    source: &Path,
    target: &Path,
    now: &NaiveDateTime,
    out: &mut dyn Write,
) -> Result<SwitchOutcome> {
    if !store.exists(source) {
        return Err(MockDataError::NotFound(source.to_path_buf()));
    }
    let bytes = store
        .read(source)
        .map_err(|e| MockDataError::from_io(source, e))?;
    let document = Document::parse(source, &bytes)?;
    if !document.has_key("tasks") {
        return Err(MockDataError::schema(format!(
            "Source file '{}' does not contain 'tasks' array.",
            source.display()
        )));
    }
    let tasks = document.tasks()?;
    if store.same_file(source, target) {
        return Err(MockDataError::io(
            target,
            io::Error::new(io::ErrorKind::InvalidInput, "source and target are the same file"),
        ));
    }
    debug!("Source {} has {} tasks", source.display(), tasks.len());

    let backup = if store.exists(target) {
        let backup = backup_current(store, target, now, out)?;
        if let Some(path) = &backup {
            writeln!(out, "Previous data backed up to: {}", path.display())?;
        }
        backup
    } else {
        None
    };

    store
        .copy(source, target)
        .map_err(|e| MockDataError::io(target, e))?;
    writeln!(out, "Successfully switched to: {}", source.display())?;
    writeln!(out, "Target file updated: {}", target.display())?;

    let summary = DataSummary::from_tasks(&tasks);
    write_summary(&summary, out)?;
    Ok(SwitchOutcome { backup, summary })
}

fn write_summary(summary: &DataSummary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Data Summary:")?;
    writeln!(out, "  Total tasks: {}", summary.task_count)?;
    writeln!(out, "  Categories: {}", summary.categories_line())?;
    writeln!(out, "  Statuses: {}", summary.statuses_line())?;
    if !summary.parents.is_empty() {
        writeln!(out, "  Parent tasks with subtasks: {}", summary.parents.len())?;
        for (title, count) in &summary.parents {
            writeln!(out, "    - {} ({} subtasks)", title, count)?;
        }
    }
    Ok(())
}
