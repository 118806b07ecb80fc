//! Portfolio stores.
//!
//! The exporter fetches a document just before generating and drops it
//! afterwards; stores are read-only from its point of view.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::portfolio::PortfolioDocument;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Portfolio not found: {id}")]
    NotFound { id: String },

    #[error("Failed to read portfolio {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Portfolio {id} is not a valid document: {source}")]
    Invalid {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PortfolioStore {
    fn fetch(&self, id: &str) -> Result<PortfolioDocument, StoreError>;
}

/// In-memory store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, PortfolioDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, doc: PortfolioDocument) {
        self.documents.insert(id.into(), doc);
    }
}

impl PortfolioStore for MemoryStore {
    fn fetch(&self, id: &str) -> Result<PortfolioDocument, StoreError> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}

/// Store reading `<root>/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\']);
        valid.then(|| self.root.join(format!("{id}.json")))
    }
}

impl PortfolioStore for DirectoryStore {
    fn fetch(&self, id: &str) -> Result<PortfolioDocument, StoreError> {
        let not_found = || StoreError::NotFound { id: id.to_string() };
        let path = self.path_for(id).ok_or_else(not_found)?;

        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(source) => {
                return Err(StoreError::Io {
                    id: id.to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&source).map_err(|source| StoreError::Invalid {
            id: id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let mut doc = PortfolioDocument::default();
        doc.name = "Mine".into();
        store.insert("p1", doc.clone());

        assert_eq!(store.fetch("p1").unwrap(), doc);
        assert!(matches!(store.fetch("p2"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_directory_store_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("alice.json"), r#"{ "name": "Alice" }"#).unwrap();

        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.fetch("alice").unwrap().name, "Alice");
    }

    #[test]
    fn test_directory_store_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        let err = store.fetch("nobody").unwrap_err();
        assert_eq!(err.to_string(), "Portfolio not found: nobody");
    }

    #[test]
    fn test_directory_store_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "[1, 2").unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(matches!(store.fetch("bad"), Err(StoreError::Invalid { .. })));
    }

    #[test]
    fn test_directory_store_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        for id in ["", "..", "../etc/passwd", "a/b", "a\\b"] {
            assert!(
                matches!(store.fetch(id), Err(StoreError::NotFound { .. })),
                "{id:?}"
            );
        }
    }

    #[test]
    fn test_directory_store_dots_inside_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("my..site.json"), r#"{ "name": "Dots" }"#).unwrap();
        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.fetch("my..site").unwrap().name, "Dots");
    }
}
