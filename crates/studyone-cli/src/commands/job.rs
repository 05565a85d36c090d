//! Job application tracker commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyone_core::model::{JobApplication, JobStatus};
use studyone_core::repo::Repository;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum JobAction {
    /// Record an application
    Create {
        /// Company name
        company: String,
        /// Position title
        position: String,
        /// Application date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date_applied: Option<NaiveDate>,
        /// Location
        #[arg(long, default_value = "")]
        location: String,
        /// Salary range
        #[arg(long)]
        salary: Option<String>,
        /// Posting URL
        #[arg(long)]
        url: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List applications
    List {
        /// Filter by status: applied, interview, offer, rejected, pending
        #[arg(long)]
        status: Option<String>,
    },
    /// Move an application to a new status
    SetStatus {
        /// Application ID
        id: String,
        /// New status: applied, interview, offer, rejected, pending
        status: String,
    },
    /// Delete an application
    Delete {
        /// Application ID
        id: String,
    },
}

pub fn run(action: JobAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let repo = Repository::<JobApplication>::new(&store);

    match action {
        JobAction::Create {
            company,
            position,
            date_applied,
            location,
            salary,
            url,
            notes,
        } => {
            let date = date_applied.unwrap_or_else(|| Local::now().date_naive());
            let mut job = JobApplication::new(company, position, date);
            job.location = location;
            job.salary = salary;
            job.url = url;
            job.notes = notes;
            let job = repo.create(job)?;
            println!("Application recorded: {}", job.id);
        }
        JobAction::List { status } => {
            let filter = status.as_deref().map(JobStatus::parse);
            let jobs: Vec<JobApplication> = repo
                .load()?
                .into_iter()
                .filter(|j| filter.is_none() || Some(j.status) == filter)
                .collect();
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        JobAction::SetStatus { id, status } => {
            let mut job = repo
                .get(&id)?
                .ok_or_else(|| format!("no application with id {id}"))?;
            job.status = JobStatus::parse(&status);
            let status = job.status;
            repo.update(job)?;
            println!("Application {id} moved to {}", status.as_str());
        }
        JobAction::Delete { id } => {
            if repo.delete(&id)? {
                println!("Application deleted: {id}");
            } else {
                println!("No application with id {id}");
            }
        }
    }
    Ok(())
}
