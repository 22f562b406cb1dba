//! Key-value storage for user settings
//!
//! A flat TOML table of string entries. Every `set` rewrites the file so the
//! value is durable before the next read.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let entries = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(entries)
    }

    /// Read one entry; `None` when the file or the key is missing
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    /// Write one entry, keeping the others
    ///
    /// A file that cannot be parsed is replaced, keeping only the new entry.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{:#}", e), "overwriting unreadable settings file");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());

        let content = toml::to_string_pretty(&entries)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("settings.toml"));
        assert_eq!(storage.get("userClassId").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        storage.set("userClassId", "24HR").unwrap();
        storage.set("userIcalUrl", "https://example.com/cal.ics").unwrap();

        assert_eq!(storage.get("userClassId").unwrap().as_deref(), Some("24HR"));
        assert_eq!(
            storage.get("userIcalUrl").unwrap().as_deref(),
            Some("https://example.com/cal.ics")
        );
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_file = NamedTempFile::new().unwrap();
        Storage::new(temp_file.path())
            .set("userTodos", r#"[{"text":"a","done":false}]"#)
            .unwrap();

        let reopened = Storage::new(temp_file.path());
        assert_eq!(
            reopened.get("userTodos").unwrap().as_deref(),
            Some(r#"[{"text":"a","done":false}]"#)
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not = [valid").unwrap();
        assert!(Storage::new(temp_file.path()).get("userClassId").is_err());
    }

    #[test]
    fn test_set_replaces_corrupt_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not = [valid").unwrap();
        let storage = Storage::new(temp_file.path());

        storage.set("userClassId", "27HR").unwrap();
        assert_eq!(storage.get("userClassId").unwrap().as_deref(), Some("27HR"));
    }
}
