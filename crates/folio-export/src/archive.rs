//! In-memory ZIP packaging.
//!
//! Folder entries are derived from the file paths and written once, ahead
//! of the first file inside them. Timestamps are pinned to the DOS epoch so
//! the same entries always produce the same bytes.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Text(String),
    Binary(Vec<u8>),
}

impl EntryContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EntryContent::Text(text) => text.as_bytes(),
            EntryContent::Binary(bytes) => bytes,
        }
    }
}

/// One file in the archive. `path` is relative and `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub content: EntryContent,
}

impl ArchiveEntry {
    pub fn text(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: EntryContent::Text(content.into()),
        }
    }

    pub fn binary(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: EntryContent::Binary(content.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive build failed: invalid entry path {path:?}")]
    InvalidPath { path: String },

    #[error("Archive build failed: duplicate entry {path:?}")]
    DuplicateEntry { path: String },

    #[error("Archive build failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Archive build failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a ZIP archive from `entries`, in order. Nothing is returned unless
/// every entry was written.
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
    check_entries(entries)?;

    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);
    let dir_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o755);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut created: HashSet<&str> = HashSet::new();

    for entry in entries {
        for dir in parent_dirs(&entry.path) {
            if created.insert(dir) {
                writer.add_directory(dir, dir_options)?;
            }
        }
        writer.start_file(entry.path.as_str(), file_options)?;
        writer.write_all(entry.content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn check_entries(entries: &[ArchiveEntry]) -> Result<(), ArchiveError> {
    let mut files: HashSet<&str> = HashSet::new();
    let mut dirs: HashSet<&str> = HashSet::new();

    for entry in entries {
        if !is_valid_path(&entry.path) {
            return Err(ArchiveError::InvalidPath {
                path: entry.path.clone(),
            });
        }
        if !files.insert(&entry.path) {
            return Err(ArchiveError::DuplicateEntry {
                path: entry.path.clone(),
            });
        }
        dirs.extend(parent_dirs(&entry.path).map(|d| d.trim_end_matches('/')));
    }

    // A file may not share its name with a folder another entry needs.
    if let Some(clash) = entries.iter().find(|e| dirs.contains(e.path.as_str())) {
        return Err(ArchiveError::DuplicateEntry {
            path: clash.path.clone(),
        });
    }

    Ok(())
}

fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// `"a/b/c.txt"` → `"a/"`, `"a/b/"`.
fn parent_dirs(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(i, _)| &path[..=i])
}
