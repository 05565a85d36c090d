//! Note commands.

use clap::Subcommand;
use studyone_core::model::Note;
use studyone_core::repo::Repository;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a new note
    Create {
        /// Note title
        title: String,
        /// Note body
        #[arg(long, default_value = "")]
        content: String,
        /// Folder name for grouping
        #[arg(long)]
        folder: Option<String>,
    },
    /// List notes
    List {
        /// Filter by folder
        #[arg(long)]
        folder: Option<String>,
    },
    /// Get note details
    Get {
        /// Note ID
        id: String,
    },
    /// Replace note content
    Edit {
        /// Note ID
        id: String,
        /// New body
        content: String,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let repo = Repository::<Note>::new(&store);

    match action {
        NoteAction::Create {
            title,
            content,
            folder,
        } => {
            let mut note = Note::new(title, content);
            note.folder = folder;
            let note = repo.create(note)?;
            println!("Note created: {}", note.id);
        }
        NoteAction::List { folder } => {
            let notes: Vec<Note> = repo
                .load()?
                .into_iter()
                .filter(|n| folder.is_none() || n.folder == folder)
                .collect();
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        NoteAction::Get { id } => match repo.get(&id)? {
            Some(note) => println!("{}", serde_json::to_string_pretty(&note)?),
            None => println!("No note with id {id}"),
        },
        NoteAction::Edit { id, content } => {
            let mut note = repo
                .get(&id)?
                .ok_or_else(|| format!("no note with id {id}"))?;
            note.edit(content);
            repo.update(note)?;
            println!("Note updated: {id}");
        }
        NoteAction::Delete { id } => {
            if repo.delete(&id)? {
                println!("Note deleted: {id}");
            } else {
                println!("No note with id {id}");
            }
        }
    }
    Ok(())
}
