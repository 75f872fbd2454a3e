//! Single-substitution neighbours
//!
//! A word is similar to another when they have the same length and differ
//! in exactly one character.

use super::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;

/// Letters tried at each position
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';

impl Dictionary {
    /// Find dictionary words one substitution away from `word`
    ///
    /// Every position is probed with every other letter of [`ALPHABET`].
    /// Hits are returned without duplicates, ordered by position and then by
    /// letter. The probes run in parallel over a shared borrow of the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_dictionary::dictionary::Dictionary;
    ///
    /// let (dict, _) = Dictionary::from_words(["cat", "bat", "cot", "dog"]);
    /// assert_eq!(dict.find_similar("cat"), ["bat", "cot"]);
    /// ```
    #[must_use]
    pub fn find_similar(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();

        let hits: Vec<String> = (0..chars.len())
            .into_par_iter()
            .flat_map_iter(|position| self.neighbours_at(&chars, position))
            .collect();

        let mut seen = FxHashSet::default();
        hits.into_iter()
            .filter(|hit| seen.insert(hit.clone()))
            .collect()
    }

    fn neighbours_at(&self, chars: &[char], position: usize) -> Vec<String> {
        let original = chars[position];
        let mut candidate = chars.to_vec();

        ALPHABET
            .filter(|&letter| letter != original)
            .filter_map(|letter| {
                candidate[position] = letter;
                let text: String = candidate.iter().collect();
                self.contains(&text).then_some(text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied()).0
    }

    #[test]
    fn finds_each_position() {
        let dict = dictionary(&["cat", "bat", "cut", "cab", "dog"]);
        assert_eq!(dict.find_similar("cat"), ["bat", "cut", "cab"]);
    }

    #[test]
    fn excludes_the_word_itself() {
        let dict = dictionary(&["cat"]);
        assert!(dict.find_similar("cat").is_empty());
    }

    #[test]
    fn works_for_absent_words() {
        let dict = dictionary(&["cold", "cord", "word"]);
        assert_eq!(dict.find_similar("wold"), ["cold", "word"]);
    }

    #[test]
    fn empty_inputs() {
        let dict = dictionary(&["a"]);
        assert!(dict.find_similar("").is_empty());
        assert!(Dictionary::new().find_similar("cat").is_empty());
    }

    #[test]
    fn single_letter_word() {
        let dict = dictionary(&["a", "i", "o"]);
        assert_eq!(dict.find_similar("a"), ["i", "o"]);
    }

    #[test]
    fn uppercase_letters_only_match_lowercase_neighbours() {
        let dict = dictionary(&["cat", "Cat"]);
        // Only lowercase substitutions are generated
        assert_eq!(dict.find_similar("Cat"), ["cat"]);
    }
}
