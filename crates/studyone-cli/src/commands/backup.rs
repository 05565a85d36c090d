//! Backup export/import commands.

use std::path::PathBuf;

use clap::Subcommand;
use studyone_core::backup;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum BackupAction {
    /// Write all stored data to a JSON file
    Export {
        /// Output path
        path: PathBuf,
    },
    /// Overwrite stored data from a backup file
    Import {
        /// Backup file path
        path: PathBuf,
    },
}

pub fn run(action: BackupAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        BackupAction::Export { path } => {
            backup::export_to_file(&store, &path)?;
            println!("Backup written to {}", path.display());
        }
        BackupAction::Import { path } => {
            let summary = backup::import_from_file(&store, &path)?;
            println!("Imported {} keys", summary.imported.len());
            for key in &summary.imported {
                println!("  {key}");
            }
            if !summary.ignored.is_empty() {
                println!("Ignored unknown keys: {}", summary.ignored.join(", "));
            }
        }
    }
    Ok(())
}
