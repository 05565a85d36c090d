//! Pomodoro commands.
//!
//! The countdown itself runs in whatever front end is polling it; the CLI
//! shows the configured cycle and records a finished focus session as the
//! day's qualifying streak action.

use chrono::Local;
use clap::Subcommand;
use studyone_core::storage::Store;
use studyone_core::{AppSettings, StreakRecord};

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Show the configured pomodoro cycle
    Show,
    /// Record a completed focus session (feeds the daily streak)
    Complete,
}

pub fn run(action: PomodoroAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        PomodoroAction::Show => {
            let settings = AppSettings::load(&store)?;
            println!("{}", serde_json::to_string_pretty(&settings.pomodoro)?);
        }
        PomodoroAction::Complete => {
            let today = Local::now().date_naive();
            let mut streak = StreakRecord::load(&store)?;
            streak.record_completion(today);
            streak.save(&store)?;
            println!("Focus session recorded. Streak: {}", streak.count);
        }
    }
    Ok(())
}
