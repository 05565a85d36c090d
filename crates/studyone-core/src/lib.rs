//! # StudyOne Core Library
//!
//! Core logic for StudyOne, a study-companion toolset: notes, tasks, exam
//! and job-application trackers, flashcard decks, a daily streak, and a
//! pomodoro countdown, all persisted in one on-device key-value store of
//! JSON blobs. The CLI binary is a thin front end over this library.
//!
//! ## Architecture
//!
//! - **Store**: SQLite-backed key-value store; every domain collection owns
//!   one key and is rewritten whole on each save
//! - **Repository**: one generic CRUD implementation parameterized by
//!   entity type and store key
//! - **Streak engine**: calendar-day streak arithmetic with lazy gap
//!   detection on read
//! - **Backup**: whole-store JSON export/import keyed by store keys
//!
//! Everything is single-threaded and synchronous; there is no network, no
//! background worker, and no retry logic anywhere in the crate.

pub mod backup;
pub mod error;
pub mod metrics;
pub mod model;
pub mod pomodoro;
pub mod repo;
pub mod settings;
pub mod storage;
pub mod streak;

pub use backup::ImportSummary;
pub use error::{BackupError, CoreError, Result, StoreError, ValidationError};
pub use metrics::DashboardSummary;
pub use model::{Card, Deck, Exam, JobApplication, JobStatus, Note, SyllabusItem, Task};
pub use pomodoro::{PomodoroPhase, PomodoroTimer};
pub use repo::{Entity, Repository};
pub use settings::{AppSettings, PomodoroSettings};
pub use storage::Store;
pub use streak::StreakRecord;
