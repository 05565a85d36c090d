//! Backup export and import.
//!
//! The backup format is one JSON object whose keys are exactly the store
//! keys and whose values are the parsed (not re-stringified) stored
//! contents. Import is last-import-wins per key, with no merge: every
//! recognized key in the document overwrites the stored value verbatim.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{BackupError, Result};
use crate::storage::{keys, Store};

/// Outcome of an import, for user-facing reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Store keys that were overwritten.
    pub imported: Vec<String>,
    /// Keys present in the document but not part of the store layout.
    pub ignored: Vec<String>,
}

/// Collect every present store key into one backup object.
///
/// Values that fail to parse are carried as `null` rather than dropped, so
/// the export never fails on a corrupt value.
///
/// # Errors
/// Returns an error only if a store query fails.
pub fn export(store: &Store) -> Result<Value> {
    let mut doc = Map::new();
    for &key in keys::ALL {
        if let Some(text) = store.get_raw(key)? {
            let value = serde_json::from_str(&text).unwrap_or(Value::Null);
            doc.insert(key.to_string(), value);
        }
    }
    Ok(Value::Object(doc))
}

/// Write the backup object to `path`, pretty-printed.
///
/// # Errors
/// Returns an error if the export or the file write fails.
pub fn export_to_file(store: &Store, path: &Path) -> Result<()> {
    let doc = export(store)?;
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

/// Import a backup document, overwriting each recognized store key.
///
/// The document is parsed and validated in full before anything is
/// written: malformed input fails with a [`BackupError`] and leaves the
/// store untouched. Keys missing from the document are left alone; unknown
/// keys are ignored and reported.
///
/// # Errors
/// Returns a backup error on malformed input, or a store error if a write
/// fails.
pub fn import(store: &Store, text: &str) -> Result<ImportSummary> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| BackupError::InvalidJson(e.to_string()))?;
    let object = doc.as_object().ok_or(BackupError::NotAnObject)?;

    let mut summary = ImportSummary::default();
    for key in object.keys() {
        if keys::ALL.contains(&key.as_str()) {
            summary.imported.push(key.clone());
        } else {
            summary.ignored.push(key.clone());
        }
    }

    for key in &summary.imported {
        store.put_raw(key, &serde_json::to_string(&object[key.as_str()])?)?;
    }
    Ok(summary)
}

/// Import a backup document from a file.
///
/// # Errors
/// Returns an error if the file cannot be read or the document is invalid.
pub fn import_from_file(store: &Store, path: &Path) -> Result<ImportSummary> {
    let text = std::fs::read_to_string(path)?;
    import(store, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_contains_only_present_keys() {
        let store = Store::open_memory().unwrap();
        store.put_raw(keys::TASKS, "[]").unwrap();
        let doc = export(&store).unwrap();
        let object = doc.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object[keys::TASKS], serde_json::json!([]));
    }

    #[test]
    fn export_values_are_parsed_not_stringified() {
        let store = Store::open_memory().unwrap();
        store
            .put_raw(keys::NOTES, r#"[{"id":"1","title":"t"}]"#)
            .unwrap();
        let doc = export(&store).unwrap();
        assert!(doc[keys::NOTES].is_array());
        assert_eq!(doc[keys::NOTES][0]["title"], "t");
    }

    #[test]
    fn import_overwrites_named_keys_verbatim() {
        let store = Store::open_memory().unwrap();
        store.put_raw(keys::TASKS, "[]").unwrap();
        let doc = r#"{"studyone_tasks": [{"id":"1","text":"Read","completed":false}]}"#;
        let summary = import(&store, doc).unwrap();
        assert_eq!(summary.imported, vec![keys::TASKS.to_string()]);
        let stored: Value =
            serde_json::from_str(&store.get_raw(keys::TASKS).unwrap().unwrap()).unwrap();
        assert_eq!(stored[0]["text"], "Read");
    }

    #[test]
    fn malformed_json_leaves_store_untouched() {
        let store = Store::open_memory().unwrap();
        store.put_raw(keys::TASKS, "[1]").unwrap();
        assert!(import(&store, "{not json").is_err());
        assert_eq!(store.get_raw(keys::TASKS).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn non_object_document_rejected() {
        let store = Store::open_memory().unwrap();
        let err = import(&store, "[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn unknown_keys_ignored_and_reported() {
        let store = Store::open_memory().unwrap();
        let summary = import(&store, r#"{"mystery_key": 1}"#).unwrap();
        assert!(summary.imported.is_empty());
        assert_eq!(summary.ignored, vec!["mystery_key".to_string()]);
        assert!(store.get_raw("mystery_key").unwrap().is_none());
    }

    #[test]
    fn keys_absent_from_document_left_alone() {
        let store = Store::open_memory().unwrap();
        store.put_raw(keys::NOTES, "[7]").unwrap();
        import(&store, r#"{"studyone_tasks": []}"#).unwrap();
        assert_eq!(store.get_raw(keys::NOTES).unwrap().as_deref(), Some("[7]"));
    }
}
