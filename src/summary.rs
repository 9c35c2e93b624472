// Aggregate summary shared by the switcher and the validator

use std::collections::BTreeSet;

use crate::models::Task;

/// Aggregate view of a document's tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSummary {
    pub task_count: usize,
    /// Distinct `category` values, sorted.
    pub categories: BTreeSet<String>,
    /// Distinct `status` values, sorted.
    pub statuses: BTreeSet<String>,
    /// Title and subtask count of every parent task, in document order.
    pub parents: Vec<(String, usize)>,
}

impl DataSummary {
    /// Tasks without a category or status simply do not contribute one.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut summary = DataSummary {
            task_count: tasks.len(),
            ..Default::default()
        };
        for task in tasks {
            if let Some(category) = task.category() {
                summary.categories.insert(category);
            }
            if let Some(status) = task.status() {
                summary.statuses.insert(status);
            }
            if task.is_parent() {
                let title = task.title().unwrap_or_else(|| "Unknown".to_string());
                summary.parents.push((title, task.subtask_count()));
            }
        }
        summary
    }

    pub fn categories_line(&self) -> String {
        join_sorted(&self.categories)
    }

    pub fn statuses_line(&self) -> String {
        join_sorted(&self.statuses)
    }
}

fn join_sorted(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_dedups_and_sorts() {
        let tasks: Vec<Task> = serde_json::from_value(json!([
            {"title": "A", "category": "Sales", "status": "new"},
            {"title": "B", "category": "Marketing", "status": "done",
             "subtasks": [{"title": "b1", "status": "new"}, {"title": "b2", "status": "new"}]},
            {"title": "C", "category": "Sales", "status": "new", "subtasks": []},
            {"title": "D"}
        ]))
        .unwrap();

        let summary = DataSummary::from_tasks(&tasks);
        assert_eq!(summary.task_count, 4);
        assert_eq!(summary.categories_line(), "Marketing, Sales");
        assert_eq!(summary.statuses_line(), "done, new");
        assert_eq!(summary.parents, vec![("B".to_string(), 2)]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = DataSummary::from_tasks(&[]);
        assert_eq!(summary.task_count, 0);
        assert_eq!(summary.categories_line(), "");
        assert!(summary.parents.is_empty());
    }
}
