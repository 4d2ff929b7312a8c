use crate::analysis::length::word_length;
use hashbrown::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a word list from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File is not valid UTF-8 text: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, LoadError>;

/// The set of distinct whitespace-delimited tokens found in an input.
///
/// Duplicate words collapse into a single entry, so each word contributes
/// exactly once to any statistic computed over the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Builds a set from raw text, splitting on Unicode whitespace.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Reads the file at `path` and builds a set of its distinct words.
    ///
    /// # Errors
    ///
    /// * [`LoadError::NotFound`] if nothing exists at `path`.
    /// * [`LoadError::InvalidEncoding`] if the contents are not UTF-8.
    /// * [`LoadError::Io`] for any other failure (permissions, directories, etc.).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidData => LoadError::InvalidEncoding {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let words = Self::from_text(&text);
        log::debug!(
            "Loaded {} unique words ({} bytes) from {}",
            words.len(),
            text.len(),
            path.display()
        );
        Ok(words)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterates over the distinct words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pairs every word with its character length.
    ///
    /// This is computed on demand; nothing is cached between calls.
    pub fn lengths(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter().map(|word| (word, word_length(word)))
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
