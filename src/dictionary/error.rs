//! Dictionary error type

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors at the file boundary of a [`Dictionary`](super::Dictionary)
///
/// Duplicate and absent words are not errors; they are reported through
/// [`AddOutcome`](super::AddOutcome) and [`RemoveOutcome`](super::RemoveOutcome).
#[derive(Debug)]
pub enum DictionaryError {
    /// A word-list file could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// A word-list filename without the `.txt` extension
    InvalidFilename(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                write!(f, "The file {} does not exist", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            Self::InvalidFilename(name) => {
                write!(f, "Wrong input: '{name}' is not a .txt file")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidFilename(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message() {
        let err = DictionaryError::Io {
            path: PathBuf::from("words.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "The file words.txt does not exist");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_filename_message() {
        let err = DictionaryError::InvalidFilename("words.csv".to_string());
        assert_eq!(err.to_string(), "Wrong input: 'words.csv' is not a .txt file");
    }
}
