use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repo::Entity;
use crate::storage::keys;

/// A free-form note. No versioning; last write wins.
///
/// Wire field names are camelCase to match the stored record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Optional folder name for grouping; informal, never validated.
    #[serde(default)]
    pub folder: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            title: title.into(),
            content: content.into(),
            folder: None,
            updated_at: Utc::now(),
        }
    }

    /// Replace content and bump the update stamp.
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }
}

impl Entity for Note {
    const KEY: &'static str = keys::NOTES;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        Ok(())
    }
}
