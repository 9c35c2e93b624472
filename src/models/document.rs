use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{MockDataError, Result};
use crate::models::Task;

/// A parsed mock data document.
///
/// Only the root shape is checked on parse; the top-level keys are looked
/// up on demand so each tool can decide which of them it requires.
#[derive(Debug, Clone)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Parse document bytes read from `path`.
    pub fn parse(path: &Path, bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|source| {
            MockDataError::InvalidFormat { path: path.to_path_buf(), source }
        })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(MockDataError::schema(format!(
                "'{}' does not contain a JSON object",
                path.display()
            ))),
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn stage_mapping(&self) -> Option<&Value> {
        self.root.get("stage_mapping")
    }

    /// The `tasks` array as task records.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        let raw = self
            .root
            .get("tasks")
            .ok_or_else(|| MockDataError::schema("Missing required key: tasks"))?;
        let items = raw
            .as_array()
            .ok_or_else(|| MockDataError::schema("'tasks' is not an array"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(m) => Ok(Task::from_map(m.clone())),
                _ => Err(MockDataError::schema(format!("Task {} is not an object", i + 1))),
            })
            .collect()
    }
}
