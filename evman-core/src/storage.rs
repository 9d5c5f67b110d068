//! Persistence sinks for the event store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::EvmanResult;

/// Whole-content storage backing an [`EventStore`](crate::store::EventStore).
///
/// Reads and writes always cover the entire file; there is no append log.
pub trait Storage {
    /// Read the stored content. `None` if nothing has been stored yet.
    fn read(&self) -> EvmanResult<Option<String>>;

    /// Replace the stored content. Either all of `content` is stored or
    /// the previous content is left as it was.
    fn write(&mut self, content: &str) -> EvmanResult<()>;
}

/// Events file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "events".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn read(&self) -> EvmanResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, content: &str) -> EvmanResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        std::fs::write(&temp, content)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// In-memory storage, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    content: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        MemoryStorage {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> EvmanResult<Option<String>> {
        Ok(self.content.clone())
    }

    fn write(&mut self, content: &str) -> EvmanResult<()> {
        self.content = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("events.txt"));

        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_write_replaces_content_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.txt");
        let mut storage = FileStorage::new(&path);

        storage.write("first\nsecond\n").unwrap();
        storage.write("third\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "third\n");
        assert!(!dir.path().join("events.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/events.txt");
        let mut storage = FileStorage::new(&path);

        storage.write("a|b|c|d|e\n").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some("a|b|c|d|e\n"));
    }

    #[test]
    fn test_reading_a_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read().is_err());
    }
}
