//! FAQ dataset types.
//!
//! The catalog is loaded once at startup and shared read-only between
//! requests, so it exposes no mutation API.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single known question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Error type for dataset loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read FAQ dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid FAQ dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("FAQ dataset is empty")]
    Empty,

    #[error("FAQ entry {index} has an empty {field}")]
    BlankField { index: usize, field: &'static str },
}

/// Ordered, immutable list of FAQ entries.
#[derive(Debug, Clone)]
pub struct FaqCatalog {
    entries: Vec<FaqEntry>,
}

impl FaqCatalog {
    /// Build a catalog from entries, rejecting an empty list or blank text.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.question.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    index,
                    field: "question",
                });
            }
            if entry.answer.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    index,
                    field: "answer",
                });
            }
        }

        Ok(Self { entries })
    }

    /// Read a JSON array of `{"question", "answer"}` objects from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<FaqEntry> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty catalogs. Pairs with `len`
    /// for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }
}
