use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repo::Entity;
use crate::storage::keys;

/// A topic entry nested inside an exam, with its own completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusItem {
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub completed: bool,
}

impl SyllabusItem {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            topic: topic.into(),
            completed: false,
        }
    }
}

/// An upcoming exam with a mutable syllabus checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub date: NaiveDate,
    /// Start time as "HH:mm"; display-only, never parsed for arithmetic.
    #[serde(default)]
    pub time: String,
    /// Accent color hex for the exam card.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub syllabus: Vec<SyllabusItem>,
}

impl Exam {
    pub fn new(name: impl Into<String>, subject: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: super::new_id(),
            name: name.into(),
            subject: subject.into(),
            date,
            time: String::new(),
            color: String::new(),
            notes: None,
            syllabus: Vec::new(),
        }
    }

    /// Fraction of syllabus topics completed, 0.0 when the syllabus is empty.
    pub fn syllabus_progress(&self) -> f64 {
        if self.syllabus.is_empty() {
            return 0.0;
        }
        let done = self.syllabus.iter().filter(|s| s.completed).count();
        done as f64 / self.syllabus.len() as f64
    }

    /// Calendar days from `today` to the exam date; negative once past.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    /// Toggle the syllabus item with the given id. Returns false if absent.
    pub fn toggle_syllabus_item(&mut self, item_id: &str) -> bool {
        match self.syllabus.iter_mut().find(|s| s.id == item_id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }
}

impl Entity for Exam {
    const KEY: &'static str = keys::EXAMS;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "subject" });
        }
        Ok(())
    }
}
