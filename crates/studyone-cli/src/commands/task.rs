//! Task commands.

use chrono::NaiveDate;
use clap::Subcommand;
use studyone_core::model::Task;
use studyone_core::repo::Repository;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// List name for grouping
        #[arg(long)]
        list: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by list name
        #[arg(long)]
        list: Option<String>,
        /// Only open tasks
        #[arg(long)]
        open: bool,
    },
    /// Toggle completion in place
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let repo = Repository::<Task>::new(&store);

    match action {
        TaskAction::Add { text, due, list } => {
            let mut task = Task::new(text);
            task.due_date = due;
            task.list = list;
            let task = repo.create(task)?;
            println!("Task added: {}", task.id);
        }
        TaskAction::List { list, open } => {
            let tasks: Vec<Task> = repo
                .load()?
                .into_iter()
                .filter(|t| list.is_none() || t.list == list)
                .filter(|t| !open || !t.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Toggle { id } => {
            let mut task = repo
                .get(&id)?
                .ok_or_else(|| format!("no task with id {id}"))?;
            task.toggle();
            let done = task.completed;
            repo.update(task)?;
            println!("Task {id} is now {}", if done { "done" } else { "open" });
        }
        TaskAction::Delete { id } => {
            if repo.delete(&id)? {
                println!("Task deleted: {id}");
            } else {
                println!("No task with id {id}");
            }
        }
    }
    Ok(())
}
