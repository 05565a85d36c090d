pub mod backup;
pub mod deck;
pub mod exam;
pub mod job;
pub mod note;
pub mod pomodoro;
pub mod settings;
pub mod stats;
pub mod streak;
pub mod task;
