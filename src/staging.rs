// ABOUTME: File staging for the deck-viewer application
// ABOUTME: Accumulates user-chosen data files client-side until they are submitted

use crate::errors::{DeckError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Extensions the slide service knows how to parse. Advisory only.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "pdf"];

/// A user-selected file waiting to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    /// Display name, also sent as the multipart file name
    pub name: String,
}

impl StagedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, name }
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                ACCEPTED_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(DeckError::PathNotFoundError(self.path.clone()));
        }
        std::fs::read(&self.path).map_err(DeckError::FileReadError)
    }
}

/// Ordered set of staged files. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct FileStaging {
    files: Vec<StagedFile>,
}

impl FileStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append newly chosen files after the ones already staged
    pub fn add<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = StagedFile>,
    {
        for file in files {
            if !file.has_accepted_extension() {
                warn!(
                    "{} is not one of .{}; the service may reject it",
                    file.name,
                    ACCEPTED_EXTENSIONS.join(", .")
                );
            }
            debug!("Staging {:?}", file.path);
            self.files.push(file);
        }
    }

    /// Remove the file at `index`; later files shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// The current staged sequence. Submitting does not clear it.
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Expand a path argument into staged files. Arguments containing glob
/// metacharacters are expanded and sorted; plain paths are taken as-is.
pub fn expand_pattern(pattern: &str) -> Result<Vec<StagedFile>> {
    if !pattern.contains(&['*', '?', '['][..]) {
        let path = Path::new(pattern);
        if !path.is_file() {
            return Err(DeckError::PathNotFoundError(path.to_path_buf()));
        }
        return Ok(vec![StagedFile::new(path)]);
    }

    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| DeckError::ValidationError(format!("Invalid glob pattern: {}", e)))?
        .flatten()
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(DeckError::ValidationError(format!(
            "No files match {}",
            pattern
        )));
    }
    Ok(paths.into_iter().map(StagedFile::new).collect())
}
