//! Persistence of the last submitted form
//!
//! The store is a single JSON object mapping storage keys to saved forms,
//! so several profiles can share one file. An entry may be an object or a
//! JSON string holding an object, which is how a browser would keep it.
//!
//! Corruption is never fatal: an unreadable document or entry is logged and
//! treated as absent.

use crate::error::CliResult;
use fitcalc_shared::SavedForm;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed store for [`SavedForm`]s
#[derive(Debug, Clone)]
pub struct FormStore {
    path: PathBuf,
    key: String,
}

impl FormStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved form, or `None` if nothing usable is stored
    pub fn load(&self) -> CliResult<Option<SavedForm>> {
        let entries = self.read_entries()?;
        let form = match entries.get(&self.key) {
            None => None,
            Some(Value::Object(map)) => Some(SavedForm::from_map(map)),
            Some(Value::String(json)) => Some(SavedForm::parse(json)),
            Some(other) => {
                warn!(key = %self.key, value = %other, "Ignoring saved form that is not an object");
                None
            }
        };
        debug!(key = %self.key, found = form.is_some(), "Loaded saved form");
        Ok(form)
    }

    /// Save the form under this store's key, keeping other keys intact
    pub fn save(&self, form: &SavedForm) -> CliResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), form.to_value()?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&Value::Object(entries))?;
        fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), key = %self.key, "Saved form");
        Ok(())
    }

    /// Remove this store's entry; returns whether one existed
    pub fn clear(&self) -> CliResult<bool> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_none() {
            return Ok(false);
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(entries))?)?;
        Ok(true)
    }

    fn read_entries(&self) -> CliResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "Store is not a JSON object, ignoring contents");
                Ok(Map::new())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Store is corrupt, ignoring contents");
                Ok(Map::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcalc_shared::{Gender, Goal};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FormStore {
        FormStore::new(dir.path().join("store.json"), "fitcalc_userdata")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = FormStore::new(dir.path().join("nested/deeper/store.json"), "k");
        let form = SavedForm {
            gender: Some(Gender::Female),
            goal: Some(Goal::Lose),
            ..SavedForm::default()
        };
        store.save(&form).unwrap();
        assert_eq!(store.load().unwrap(), Some(form));
    }

    #[test]
    fn test_string_entry_is_parsed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"fitcalc_userdata": "{\"gender\":\"male\",\"rawHeight\":\"180\"}"}"#,
        )
        .unwrap();

        let form = store.load().unwrap().unwrap();
        assert_eq!(form.gender, Some(Gender::Male));
        assert_eq!(form.raw_height, Some(180.0));
    }

    #[test]
    fn test_corrupt_store_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{{{ definitely not json").unwrap();
        assert_eq!(store.load().unwrap(), None);

        // and can be overwritten
        store.save(&SavedForm::default()).unwrap();
        assert_eq!(store.load().unwrap(), Some(SavedForm::default()));
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.clear().unwrap());
        store.save(&SavedForm::default()).unwrap();
        assert!(store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }
}
