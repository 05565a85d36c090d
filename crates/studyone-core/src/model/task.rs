use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repo::Entity;
use crate::storage::keys;

/// A to-do item, toggled complete in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Optional list name ("Homework", "Errands"); informal grouping.
    #[serde(default)]
    pub list: Option<String>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            text: text.into(),
            completed: false,
            due_date: None,
            list: None,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Task {
    const KEY: &'static str = keys::TASKS;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "text" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_completed() {
        let mut task = Task::new("Read chapter 4");
        assert!(!task.completed);
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn missing_optional_fields_default() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","text":"Read","completed":false}"#).unwrap();
        assert!(task.due_date.is_none());
        assert!(task.list.is_none());
    }
}
