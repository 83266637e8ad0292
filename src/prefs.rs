//! Preference persistence.
//!
//! The only persisted state is the theme flag. It lives under one key in a
//! small key-value store; values are string-encoded (`"true"` / `"false"`).
//! Storage failures never reach the caller as errors: reads fall back to the
//! light theme and failed writes leave the in-memory theme authoritative.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExtmanResult;

/// Key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ExtmanResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ExtmanResult<()>;
}

/// Key-value storage backed by a JSON object file.
///
/// The file is read once on open and rewritten on every modification.
pub struct JsonFileStore {
    path: PathBuf,
    cache: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match Self::read(&path) {
            Ok(cache) => cache,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable preference file");
                BTreeMap::new()
            }
        };
        Self { path, cache }
    }

    fn read(path: &Path) -> ExtmanResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn flush(&self) -> ExtmanResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.cache)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Preferences written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> ExtmanResult<Option<String>> {
        Ok(self.cache.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExtmanResult<()> {
        self.cache.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Process-local storage, used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ExtmanResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExtmanResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Default location of the preference file.
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("extman").join("preferences.json"))
}

/// Reads and writes the persisted theme flag.
pub struct ThemePreference {
    store: Box<dyn KeyValueStore>,
}

impl ThemePreference {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// In-memory only; nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// File-backed at `path`, or in-memory when `path` is `None`.
    pub fn open(path: Option<PathBuf>) -> Self {
        match path.or_else(default_preferences_path) {
            Some(path) => Self::new(Box::new(JsonFileStore::open(path))),
            None => {
                warn!("No data directory found, theme will not be remembered");
                Self::in_memory()
            }
        }
    }

    /// The persisted flag, or `false` (light) when nothing usable is stored.
    pub fn load(&self) -> bool {
        match self.store.get(DARK_MODE_KEY) {
            Ok(Some(value)) => value == "true",
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using light theme");
                false
            }
        }
    }

    /// Persist `flag`, reporting storage errors.
    fn try_save(&mut self, flag: bool) -> ExtmanResult<()> {
        self.store
            .set(DARK_MODE_KEY, if flag { "true" } else { "false" })
    }

    /// Persist `flag`. Failures are logged and otherwise ignored.
    pub fn save(&mut self, flag: bool) {
        if let Err(e) = self.try_save(flag) {
            warn!(error = %e, "Failed to save theme preference");
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtmanError;
    use tempfile::TempDir;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> ExtmanResult<Option<String>> {
            Err(ExtmanError::Config("unavailable".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> ExtmanResult<()> {
            Err(ExtmanError::Config("unavailable".into()))
        }
    }

    #[test]
    fn test_load_defaults_to_light() {
        let prefs = ThemePreference::in_memory();
        assert!(!prefs.load());
    }

    #[test]
    fn test_save_then_load() {
        let mut prefs = ThemePreference::in_memory();
        prefs.save(true);
        assert!(prefs.load());
        prefs.save(false);
        assert!(!prefs.load());
    }

    #[test]
    fn test_unexpected_value_reads_light() {
        let mut store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "yes").unwrap();
        let prefs = ThemePreference::new(Box::new(store));
        assert!(!prefs.load());
    }

    #[test]
    fn test_broken_storage_is_non_fatal() {
        let mut prefs = ThemePreference::new(Box::new(BrokenStore));
        assert!(!prefs.load());
        prefs.save(true);
        assert!(prefs.try_save(true).is_err());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("preferences.json");

        {
            let mut prefs = ThemePreference::open(Some(path.clone()));
            prefs.save(true);
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"darkMode\": \"true\""));

        let prefs = ThemePreference::open(Some(path));
        assert!(prefs.load());
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);

        store.set(DARK_MODE_KEY, "true").unwrap();
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }
}
