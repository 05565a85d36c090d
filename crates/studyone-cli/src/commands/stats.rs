//! Dashboard and summary commands.

use chrono::Local;
use clap::Subcommand;
use studyone_core::model::{Deck, Exam, JobApplication, Note, Task};
use studyone_core::repo::Repository;
use studyone_core::storage::Store;
use studyone_core::{metrics, StreakRecord};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregate dashboard counts
    Dashboard,
    /// Application counts per pipeline stage
    Jobs,
    /// Unlocked achievements
    Achievements,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Dashboard => {
            let notes = Repository::<Note>::new(&store).load()?;
            let tasks = Repository::<Task>::new(&store).load()?;
            let exams = Repository::<Exam>::new(&store).load()?;
            let jobs = Repository::<JobApplication>::new(&store).load()?;
            let decks = Repository::<Deck>::new(&store).load()?;
            let streak = StreakRecord::load(&store)?;

            let summary =
                metrics::summarize(&notes, &tasks, &exams, &jobs, &decks, &streak, today);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Jobs => {
            let jobs = Repository::<JobApplication>::new(&store).load()?;
            for (status, count) in metrics::jobs_by_status(&jobs) {
                println!("{:<10} {count}", status.as_str());
            }
        }
        StatsAction::Achievements => {
            let notes = Repository::<Note>::new(&store).load()?;
            let tasks = Repository::<Task>::new(&store).load()?;
            let exams = Repository::<Exam>::new(&store).load()?;
            let streak = StreakRecord::load(&store)?;

            let unlocked = metrics::achievements(&notes, &tasks, &exams, &streak, today);
            println!("{}", serde_json::to_string_pretty(&unlocked)?);
        }
    }
    Ok(())
}
