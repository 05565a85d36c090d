use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repo::Entity;
use crate::storage::keys;

/// Pipeline stage of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Pending,
}

impl JobStatus {
    /// Parse the lowercase wire form; anything unrecognized maps to Pending.
    pub fn parse(s: &str) -> Self {
        match s {
            "applied" => JobStatus::Applied,
            "interview" => JobStatus::Interview,
            "offer" => JobStatus::Offer,
            "rejected" => JobStatus::Rejected,
            _ => JobStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
            JobStatus::Pending => "pending",
        }
    }
}

/// A tracked job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl JobApplication {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        date_applied: NaiveDate,
    ) -> Self {
        Self {
            id: super::new_id(),
            company: company.into(),
            position: position.into(),
            location: String::new(),
            date_applied,
            status: JobStatus::Applied,
            salary: None,
            notes: None,
            url: None,
        }
    }
}

impl Entity for JobApplication {
    const KEY: &'static str = keys::JOBS;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.company.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "company" });
        }
        if self.position.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "position" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&JobStatus::Interview).unwrap();
        assert_eq!(json, "\"interview\"");
        let back: JobStatus = serde_json::from_str("\"offer\"").unwrap();
        assert_eq!(back, JobStatus::Offer);
    }

    #[test]
    fn parse_unknown_status_is_pending() {
        assert_eq!(JobStatus::parse("ghosted"), JobStatus::Pending);
        assert_eq!(JobStatus::parse("rejected"), JobStatus::Rejected);
    }

    #[test]
    fn application_roundtrip() {
        let job = JobApplication::new(
            "Acme",
            "Junior Engineer",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        let json = serde_json::to_string(&job).unwrap();
        let decoded: JobApplication = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, job);
    }
}
