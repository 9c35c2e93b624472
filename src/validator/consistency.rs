// Cross-checks between a task's stage/status and the document's stage_mapping

use std::fmt;

use crate::models::{Stage, StageMapping, Task};

/// A task whose stage or status disagrees with `stage_mapping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// `stage` is not one of the five lifecycle stages.
    UnknownStage { task: usize, stage: String },
    /// `status` is not listed under the task's stage.
    StatusOutsideStage {
        task: usize,
        status: String,
        stage: Stage,
        /// Stage that does list the status, if any.
        listed_under: Option<Stage>,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::UnknownStage { task, stage } => {
                write!(f, "Task {}: unknown stage '{}'", task, stage)
            }
            ConsistencyIssue::StatusOutsideStage { task, status, stage, listed_under } => {
                write!(f, "Task {}: status '{}' is not listed under stage {}", task, status, stage)?;
                if let Some(other) = listed_under {
                    write!(f, " (listed under {})", other)?;
                }
                Ok(())
            }
        }
    }
}

/// Check task number `index` (1-based) against the mapping.
///
/// Tasks missing `stage` or `status` are not checked here; required-field
/// validation reports those.
pub fn check_task(index: usize, task: &Task, mapping: &StageMapping) -> Option<ConsistencyIssue> {
    let stage_name = task.stage()?;
    let status = task.status()?;
    let Some(stage) = Stage::from_str(&stage_name) else {
        return Some(ConsistencyIssue::UnknownStage { task: index, stage: stage_name });
    };
    if mapping.statuses(stage).iter().any(|s| *s == status) {
        return None;
    }
    Some(ConsistencyIssue::StatusOutsideStage {
        task: index,
        listed_under: mapping.stage_of(&status),
        status,
        stage,
    })
}
