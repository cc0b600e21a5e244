//! Document text sources - infrastructure layer
//!
//! The boundary to raw document-text extraction. Upstream extraction (PDF,
//! OCR, anything paged) is an external collaborator; all the pipeline sees
//! is one UTF-8 string per document, empty on extraction failure.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Supplies plain text for one document
///
/// An empty string signals extraction failure; no structured error is
/// carried beyond emptiness.
pub trait DocumentTextSource {
    fn extract(&self) -> String;
}

/// Text source backed by a plain UTF-8 file on disk
pub struct PlainTextFileSource {
    path: PathBuf,
}

impl PlainTextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentTextSource for PlainTextFileSource {
    fn extract(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("could not read {}: {}", self.path.display(), e);
                String::new()
            }
        }
    }
}
