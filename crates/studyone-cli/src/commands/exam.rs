//! Exam tracker commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyone_core::model::{Exam, SyllabusItem};
use studyone_core::repo::Repository;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum ExamAction {
    /// Create an exam
    Create {
        /// Exam name
        name: String,
        /// Subject
        subject: String,
        /// Exam date (YYYY-MM-DD)
        date: NaiveDate,
        /// Start time as HH:mm
        #[arg(long, default_value = "")]
        time: String,
        /// Accent color hex
        #[arg(long, default_value = "")]
        color: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List exams with countdown and syllabus progress
    List,
    /// Get exam details
    Get {
        /// Exam ID
        id: String,
    },
    /// Add a syllabus topic
    AddTopic {
        /// Exam ID
        id: String,
        /// Topic text
        topic: String,
    },
    /// Toggle a syllabus topic
    ToggleTopic {
        /// Exam ID
        id: String,
        /// Syllabus item ID
        topic_id: String,
    },
    /// Delete an exam
    Delete {
        /// Exam ID
        id: String,
    },
}

pub fn run(action: ExamAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let repo = Repository::<Exam>::new(&store);

    match action {
        ExamAction::Create {
            name,
            subject,
            date,
            time,
            color,
            notes,
        } => {
            let mut exam = Exam::new(name, subject, date);
            exam.time = time;
            exam.color = color;
            exam.notes = notes;
            let exam = repo.create(exam)?;
            println!("Exam created: {}", exam.id);
        }
        ExamAction::List => {
            let today = Local::now().date_naive();
            for exam in repo.load()? {
                println!(
                    "{}  {} ({}) in {} days, syllabus {:.0}%",
                    exam.id,
                    exam.name,
                    exam.subject,
                    exam.days_until(today),
                    exam.syllabus_progress() * 100.0
                );
            }
        }
        ExamAction::Get { id } => match repo.get(&id)? {
            Some(exam) => println!("{}", serde_json::to_string_pretty(&exam)?),
            None => println!("No exam with id {id}"),
        },
        ExamAction::AddTopic { id, topic } => {
            let mut exam = repo
                .get(&id)?
                .ok_or_else(|| format!("no exam with id {id}"))?;
            let item = SyllabusItem::new(topic);
            let item_id = item.id.clone();
            exam.syllabus.push(item);
            repo.update(exam)?;
            println!("Topic added: {item_id}");
        }
        ExamAction::ToggleTopic { id, topic_id } => {
            let mut exam = repo
                .get(&id)?
                .ok_or_else(|| format!("no exam with id {id}"))?;
            if !exam.toggle_syllabus_item(&topic_id) {
                return Err(format!("no syllabus item with id {topic_id}").into());
            }
            repo.update(exam)?;
            println!("Topic toggled: {topic_id}");
        }
        ExamAction::Delete { id } => {
            if repo.delete(&id)? {
                println!("Exam deleted: {id}");
            } else {
                println!("No exam with id {id}");
            }
        }
    }
    Ok(())
}
