use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields every task record must carry, in reporting order.
pub const REQUIRED_TASK_FIELDS: &[&str] = &[
    "id",
    "taskId",
    "title",
    "category",
    "status",
    "stage",
    "priority",
    "assignee",
];

/// Fields a task record may carry, in reporting order.
pub const OPTIONAL_TASK_FIELDS: &[&str] = &[
    "subtasks",
    "teamMembers",
    "tags",
    "dueDate",
    "progress",
    "department",
    "type",
    "clientInfo",
    "description",
    "attachmentCount",
    "commentCount",
    "lastStatusChange",
];

/// Render a JSON value for console output: strings without quotes,
/// everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Task record
///
/// Stored as the raw field map so presence of every field can be reported
/// without failing on records that only partially match the expected shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Task {
    fields: Map<String, Value>,
}

impl Task {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    fn text(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(display_value)
    }

    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    pub fn category(&self) -> Option<String> {
        self.text("category")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    pub fn stage(&self) -> Option<String> {
        self.text("stage")
    }

    /// Subtask records; entries that are not objects are skipped.
    pub fn subtasks(&self) -> Vec<Subtask> {
        self.fields
            .get("subtasks")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|m| Subtask { fields: m.clone() })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of entries in `subtasks`, zero when absent or not a list.
    pub fn subtask_count(&self) -> usize {
        self.fields
            .get("subtasks")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// A parent task is one with a non-empty `subtasks` list.
    pub fn is_parent(&self) -> bool {
        self.subtask_count() > 0
    }
}

/// Subtask record: at minimum a title and a status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Subtask {
    fields: Map<String, Value>,
}

impl Subtask {
    pub fn title(&self) -> Option<String> {
        self.fields.get("title").map(display_value)
    }

    pub fn status(&self) -> Option<String> {
        self.fields.get("status").map(display_value)
    }
}
