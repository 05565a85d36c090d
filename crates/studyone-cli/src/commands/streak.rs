//! Streak commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyone_core::storage::Store;
use studyone_core::StreakRecord;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Record today's qualifying action
    Record {
        /// Override the date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the current streak
    Show {
        /// Evaluate as of this date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        StreakAction::Record { date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let mut streak = StreakRecord::load(&store)?;
            streak.record_completion(today);
            streak.save(&store)?;
            println!("Streak: {} (last recorded {today})", streak.count);
        }
        StreakAction::Show { date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let streak = StreakRecord::load(&store)?;
            println!("Current streak: {}", streak.current_streak(today));
            if let Some(last) = streak.last_date {
                println!("Last completion: {last}");
            }
        }
    }
    Ok(())
}
