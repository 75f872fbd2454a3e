//! Word list file I/O
//!
//! Word-list files are plain text with one word per line, no header and no
//! escaping.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Load words from a file
///
/// Every line is trimmed and kept, so a blank line yields the empty word.
/// Duplicates are kept, the caller decides what to do with them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use avl_dictionary::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Split text into trimmed lines
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content.lines().map(str::trim).map(str::to_string).collect()
}

/// Write words to a file, one per line, in the order given
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_to_file<'a, P, I>(path: P, words: I) -> io::Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for word in words {
        writeln!(writer, "{word}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use avl_dictionary::wordlists::loader::words_from_slice;
/// use avl_dictionary::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&word| word.to_string()).collect()
}
