//! Store key constants.
//!
//! Every persisted value lives under exactly one of these keys. The backup
//! format (see [`crate::backup`]) is a JSON object keyed by these strings.

pub const NOTES: &str = "studyone_notes";
pub const TASKS: &str = "studyone_tasks";
pub const EXAMS: &str = "studyone_exams";
pub const JOBS: &str = "studyone_jobs";
pub const DECKS: &str = "studyone_flashcard_decks";
pub const STREAK: &str = "study_streak";
pub const USERNAME: &str = "studyone_username";
pub const POMODORO_SETTINGS: &str = "pomodoro_settings";
pub const THEME_PRESET: &str = "studyone_theme_preset";
pub const FONT_SIZE: &str = "studyone_font_size";

/// All keys eligible for backup export/import, in a stable order.
pub const ALL: &[&str] = &[
    NOTES,
    TASKS,
    EXAMS,
    JOBS,
    DECKS,
    STREAK,
    USERNAME,
    POMODORO_SETTINGS,
    THEME_PRESET,
    FONT_SIZE,
];
