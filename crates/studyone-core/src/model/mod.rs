//! Domain records.
//!
//! All entities are flat, serde-serializable records; each collection owns
//! one top-level JSON array under its store key. Cross-references between
//! entities (a deck id on a card review, a note id in a search result) are
//! plain strings by convention and never validated.

mod exam;
mod flashcard;
mod job;
mod note;
mod task;

pub use exam::{Exam, SyllabusItem};
pub use flashcard::{Card, Deck};
pub use job::{JobApplication, JobStatus};
pub use note::Note;
pub use task::Task;

use chrono::Utc;
use uuid::Uuid;

/// Generate a client-side record id.
///
/// Ids are timestamp-based (epoch milliseconds) with a short random suffix
/// so records created within the same millisecond stay distinct.
pub fn new_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &suffix[..8])
}
