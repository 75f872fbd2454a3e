//! Startup loading
//!
//! Resolves the word-list filename and loads it, optionally with a progress
//! bar for large files.

use crate::dictionary::{Dictionary, DictionaryError, LoadReport};
use crate::wordlists::loader;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Files at least this long get a progress bar
const PROGRESS_THRESHOLD: usize = 10_000;

/// Check that a word-list filename names a `.txt` file
///
/// The name is trimmed first and needs at least one character before the
/// extension, so a bare `.txt` is rejected.
///
/// # Errors
///
/// Returns [`DictionaryError::InvalidFilename`] for any other name.
pub fn validate_filename(name: &str) -> Result<PathBuf, DictionaryError> {
    let name = name.trim();
    if name.len() > ".txt".len() && name.ends_with(".txt") {
        Ok(PathBuf::from(name))
    } else {
        Err(DictionaryError::InvalidFilename(name.to_string()))
    }
}

/// Load a word-list file into a fresh dictionary
///
/// A progress bar is drawn when `show_progress` is set and the file is large.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read.
pub fn load_dictionary(
    path: &Path,
    show_progress: bool,
) -> Result<(Dictionary, LoadReport), DictionaryError> {
    if !show_progress {
        return Dictionary::load(path);
    }

    let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dict = Dictionary::new();
    let report = if words.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb.set_message("loading words");
        let report = dict.bulk_load(pb.wrap_iter(words.into_iter()));
        pb.finish_with_message("loaded");
        report
    } else {
        dict.bulk_load(words)
    };

    info!(
        path = %path.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        "loaded word list"
    );
    Ok((dict, report))
}
