use serde_json::Value;

/// Lifecycle stage that groups finer-grained status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Created,
    Active,
    Paused,
    Completed,
    Rejected,
}

impl Stage {
    /// All stages in the order they are checked and reported.
    pub const ALL: [Stage; 5] = [
        Stage::Created,
        Stage::Active,
        Stage::Paused,
        Stage::Completed,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Created => "Created",
            Stage::Active => "Active",
            Stage::Paused => "Paused",
            Stage::Completed => "Completed",
            Stage::Rejected => "Rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Created" => Some(Stage::Created),
            "Active" => Some(Stage::Active),
            "Paused" => Some(Stage::Paused),
            "Completed" => Some(Stage::Completed),
            "Rejected" => Some(Stage::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `stage_mapping` object of a document: stage name to status list.
///
/// Entries are kept in `Stage::ALL` order. A stage whose value is not a
/// list of strings keeps only its string elements (none for a non-list).
#[derive(Debug, Clone, Default)]
pub struct StageMapping {
    entries: Vec<(Stage, Vec<String>)>,
}

impl StageMapping {
    /// Build from the raw JSON value, returning the first stage that is missing.
    pub fn from_value(value: &Value) -> Result<Self, Stage> {
        let obj = value.as_object();
        let mut entries = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let raw = obj.and_then(|m| m.get(stage.as_str())).ok_or(stage)?;
            let statuses = raw
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|s| s.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            entries.push((stage, statuses));
        }
        Ok(Self { entries })
    }

    pub fn statuses(&self, stage: Stage) -> &[String] {
        self.entries
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, statuses)| statuses.as_slice())
            .unwrap_or(&[])
    }

    /// First stage whose status list contains `status`.
    pub fn stage_of(&self, status: &str) -> Option<Stage> {
        self.entries
            .iter()
            .find(|(_, statuses)| statuses.iter().any(|s| s == status))
            .map(|(stage, _)| *stage)
    }
}
