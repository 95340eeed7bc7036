//! Key-value preference storage.
//!
//! Only booleans are needed today. Values live under string keys so new
//! settings can be added without changing the on-disk shape.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::PrefsError;

/// A store of named preference values.
pub trait PreferenceStore {
    /// Read the boolean stored under `key`, or `None` if it was never written.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError>;

    /// Store `value` under `key`. Implementations persist before returning.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        (**self).get_bool(key)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        (**self).set_bool(key, value)
    }
}

/// Process-local preferences. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, bool>,
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        Ok(self.values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Preferences kept as a JSON object in a single file.
///
/// The whole file is read once on open and rewritten on every set.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFilePreferences {
    /// Open the file at `path`. A missing or empty file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Map::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| PrefsError::parse(&path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(PrefsError::io(&path, e)),
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened preferences");
        Ok(Self { path, values })
    }

    /// Like [`open`](Self::open), but an unreadable file is logged and
    /// replaced by an empty store. The file is overwritten on the next set.
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("couldn't load preferences, starting fresh: {e}");
                Self {
                    path,
                    values: Map::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| PrefsError::io(parent, e))?;
        }

        let raw = serde_json::to_string_pretty(&self.values)?;
        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| PrefsError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PrefsError::io(&self.path, e))
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(other) => {
                tracing::warn!(key, "ignoring non-boolean preference value: {other}");
                Ok(None)
            }
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values.insert(key.to_owned(), Value::Bool(value));
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_roundtrip() {
        let mut prefs = MemoryPreferences::default();
        assert_eq!(prefs.get_bool("k").unwrap(), None);
        prefs.set_bool("k", true).unwrap();
        assert_eq!(prefs.get_bool("k").unwrap(), Some(true));
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = JsonFilePreferences::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(prefs.get_bool("isDarkMode").unwrap(), None);
    }

    #[test]
    fn empty_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();

        let prefs = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(prefs.get_bool("isDarkMode").unwrap(), None);
    }

    #[test]
    fn set_writes_through_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = JsonFilePreferences::open(&path).unwrap();
        prefs.set_bool("isDarkMode", true).unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["isDarkMode"], Value::Bool(true));
    }

    #[test]
    fn reopen_sees_last_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = JsonFilePreferences::open(&path).unwrap();
        prefs.set_bool("isDarkMode", true).unwrap();
        prefs.set_bool("isDarkMode", false).unwrap();
        drop(prefs);

        let reopened = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(reopened.get_bool("isDarkMode").unwrap(), Some(false));
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        let mut prefs = JsonFilePreferences::open(&path).unwrap();
        prefs.set_bool("a", true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn other_keys_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"windowWidth": 640, "isDarkMode": false}"#).unwrap();

        let mut prefs = JsonFilePreferences::open(&path).unwrap();
        prefs.set_bool("isDarkMode", true).unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["windowWidth"], 640);
        assert_eq!(on_disk["isDarkMode"], true);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFilePreferences::open(&path).unwrap_err();
        assert!(matches!(err, PrefsError::Parse { .. }));
    }

    #[test]
    fn open_or_default_recovers_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut prefs = JsonFilePreferences::open_or_default(&path);
        assert_eq!(prefs.get_bool("isDarkMode").unwrap(), None);

        prefs.set_bool("isDarkMode", true).unwrap();
        let reopened = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(reopened.get_bool("isDarkMode").unwrap(), Some(true));
    }

    #[test]
    fn non_boolean_value_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"isDarkMode": "yes"}"#).unwrap();

        let prefs = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(prefs.get_bool("isDarkMode").unwrap(), None);
    }

    #[test]
    fn boxed_store_delegates() {
        let mut prefs: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::default());
        prefs.set_bool("k", false).unwrap();
        assert_eq!(prefs.get_bool("k").unwrap(), Some(false));
    }
}
