//! Schema validator: check a mock data file against the expected shape.
//!
//! Checks run in order and stop at the first failure: parse, top-level keys,
//! the five stages in `stage_mapping`, then every task's required fields.
//! Optional fields are only reported. Stage/status consistency is reported
//! as warnings unless strict mode is on.

pub mod consistency;

pub use consistency::{check_task, ConsistencyIssue};

use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::error::{MockDataError, Result};
use crate::models::{display_value, Document, Stage, StageMapping, Task, OPTIONAL_TASK_FIELDS, REQUIRED_TASK_FIELDS};
use crate::store::FixtureStore;
use crate::summary::DataSummary;

pub const PASS: &str = "✅";
pub const FAIL: &str = "❌";
pub const WARN: &str = "⚠️";

const RULE_WIDTH: usize = 50;

/// Top-level keys every document must have.
pub const REQUIRED_KEYS: &[&str] = &["stage_mapping", "tasks"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Treat stage/status inconsistencies as failures.
    pub strict: bool,
}

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub summary: DataSummary,
    /// Consistency warnings (always empty in strict mode).
    pub warnings: Vec<ConsistencyIssue>,
}

/// Validate the file at `path`, printing a pass/fail report to `out`.
///
/// Returns `true` when the document passes. The first failure is printed
/// and yields `false`; the only error returned is a failure to write `out`.
pub fn validate_file(
    store: &dyn FixtureStore,
    path: &Path,
    options: ValidateOptions,
    out: &mut dyn Write,
) -> io::Result<bool> {
    match try_validate(store, path, options, out) {
        Ok(_) => Ok(true),
        Err(MockDataError::Output(e)) => Err(e),
        Err(e) => {
            info!("Validation of {} failed: {}", path.display(), e);
            writeln!(out, "{} {}", FAIL, e)?;
            Ok(false)
        }
    }
}

/// Fallible core of [`validate_file`].
pub fn try_validate(
    store: &dyn FixtureStore,
    path: &Path,
    options: ValidateOptions,
    out: &mut dyn Write,
) -> Result<ValidationReport> {
    let bytes = store.read(path).map_err(|e| MockDataError::from_io(path, e))?;
    let document = Document::parse(path, &bytes)?;

    writeln!(out, "Testing file: {}", path.display())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for key in REQUIRED_KEYS {
        if !document.has_key(key) {
            return Err(MockDataError::schema(format!("Missing required key: {}", key)));
        }
        writeln!(out, "{} Found required key: {}", PASS, key)?;
    }

    let raw_mapping = document.stage_mapping().unwrap_or(&Value::Null);
    let mapping = check_stages(raw_mapping, out)?;

    let tasks = document.tasks()?;
    writeln!(out, "{} Found {} tasks", PASS, tasks.len())?;

    let mut warnings = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        check_task_fields(i + 1, task, out)?;
        if let Some(issue) = check_task(i + 1, task, &mapping) {
            if options.strict {
                return Err(MockDataError::schema(issue.to_string()));
            }
            writeln!(out, "  {}  {}", WARN, issue)?;
            warnings.push(issue);
        }
    }

    let summary = DataSummary::from_tasks(&tasks);
    write_summary(&summary, out)?;
    debug!("{} passed with {} warnings", path.display(), warnings.len());
    Ok(ValidationReport { summary, warnings })
}

/// Report each stage's status count, failing on the first missing stage.
fn check_stages(raw: &Value, out: &mut dyn Write) -> Result<StageMapping> {
    for stage in Stage::ALL {
        let Some(entry) = raw.get(stage.as_str()) else {
            return Err(MockDataError::schema(format!("Missing stage: {}", stage)));
        };
        match entry.as_array() {
            Some(statuses) => writeln!(out, "{} Found stage: {} ({} statuses)", PASS, stage, statuses.len())?,
            None => writeln!(out, "{}  Found stage: {} (not a list: {})", WARN, stage, entry)?,
        }
    }
    StageMapping::from_value(raw)
        .map_err(|stage| MockDataError::schema(format!("Missing stage: {}", stage)))
}

fn check_task_fields(index: usize, task: &Task, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Task {}: {}",
        index,
        task.title().unwrap_or_else(|| "Unknown".to_string())
    )?;

    for field in REQUIRED_TASK_FIELDS {
        match task.get(field) {
            Some(value) => writeln!(out, "  {} {}: {}", PASS, field, display_value(value))?,
            None => {
                return Err(MockDataError::schema(format!(
                    "Task {}: missing required field: {}",
                    index, field
                )))
            }
        }
    }

    for field in OPTIONAL_TASK_FIELDS {
        match task.get(field) {
            Some(value) => writeln!(out, "  {} {}: {}", PASS, field, describe_optional(field, value))?,
            None => writeln!(out, "  {}  Missing optional field: {}", WARN, field)?,
        }
    }

    let subtasks = task.subtasks();
    if !subtasks.is_empty() {
        writeln!(out, "    Subtasks:")?;
        for (j, sub) in subtasks.iter().enumerate() {
            writeln!(
                out,
                "      {}. {} ({})",
                j + 1,
                sub.title().unwrap_or_else(|| "Unknown".to_string()),
                sub.status().unwrap_or_else(|| "Unknown".to_string())
            )?;
        }
    }
    Ok(())
}

/// Lists are reported by size, everything else by value.
fn describe_optional(field: &str, value: &Value) -> String {
    match (field, value.as_array()) {
        ("subtasks", Some(items)) => format!("{} subtasks", items.len()),
        ("teamMembers", Some(items)) => format!("{} members", items.len()),
        _ => display_value(value),
    }
}

fn write_summary(summary: &DataSummary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "{} Total tasks: {}", PASS, summary.task_count)?;
    writeln!(out, "{} Categories: {}", PASS, summary.categories_line())?;
    writeln!(out, "{} Statuses: {}", PASS, summary.statuses_line())?;
    writeln!(out, "{} Parent tasks with subtasks: {}", PASS, summary.parents.len())?;
    Ok(())
}
