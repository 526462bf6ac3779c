//! `word_list`: load and tidy the plain word lists the scanner runs over.
//!
//! A word list is a text file with one word per line. Unlike puzzle entry
//! lists there is no score column and no case folding: the scanner's letter
//! prefilter is case-sensitive, so words are kept exactly as written.
//!
//! The parsing logic:
//! - Each line is trimmed; blank lines are skipped.
//! - Repeated words are dropped, keeping the first occurrence.
//! - File order is kept, because it is the tie-break order when ranking.
//!
//! Like the rest of the crate this module is **WASM-friendly**:
//! - `parse_from_str(...)` works everywhere, including WASM.
//! - `load_from_path(...)` is a **native-only** convenience method.

use std::collections::HashSet;

/// Shortest word kept by [`clean_words`].
pub const CLEAN_MIN_LEN: usize = 8;
/// Longest word kept by [`clean_words`].
pub const CLEAN_MAX_LEN: usize = 24;

/// An ordered, duplicate-free word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Words in load order.
    /// Example: `["APPLE", "PEAR", "KIWI", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// This is **WASM-safe**; pass it the text of a file fetched by the page.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut list = WordList::default();
        list.extend_unique(contents.lines().map(str::trim).filter(|line| !line.is_empty()));
        list
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Append every word not already in the list, in order. Returns how many were added.
    pub fn extend_unique<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = self.words.iter().cloned().collect();
        let before = self.words.len();
        for word in words {
            let word = word.as_ref();
            if seen.insert(word.to_string()) {
                self.words.push(word.to_string());
            }
        }
        self.words.len() - before
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Same rules as [`WordList::parse_from_str`], for lines already split.
impl From<Vec<String>> for WordList {
    fn from(lines: Vec<String>) -> Self {
        let mut list = WordList::default();
        list.extend_unique(lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty()));
        list
    }
}

/// Keep words of 8 to 24 letters with no space or hyphen, longest first.
///
/// Equal lengths keep their input order.
#[must_use]
pub fn clean_words<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut kept: Vec<String> = input
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| {
            let len = word.chars().count();
            (CLEAN_MIN_LEN..=CLEAN_MAX_LEN).contains(&len) && !word.contains([' ', '-'])
        })
        .map(str::to_string)
        .collect();
    kept.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    kept
}

/// Form used when comparing an include-list word against the dictionary:
/// trimmed, lowercased, with `ё` folded to `е`.
#[must_use]
pub fn normalize_include(word: &str) -> String {
    word.trim().to_lowercase().replace('ё', "е")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("APPLE\nPEAR\nKIWI");
        assert_eq!(list.words, vec!["APPLE", "PEAR", "KIWI"]);
    }

    #[test]
    fn test_parse_keeps_file_order_and_case() {
        let list = WordList::parse_from_str("pear\nApple\nKIWI");
        assert_eq!(list.words, vec!["pear", "Apple", "KIWI"]);
    }

    #[test]
    fn test_parse_deduplicates_exact_values() {
        let list = WordList::parse_from_str("cat\ndog\ncat\nCat");
        assert_eq!(list.words, vec!["cat", "dog", "Cat"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let list = WordList::parse_from_str("  cat  \r\n\n\n\tdog\n   \n");
        assert_eq!(list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_extend_unique() {
        let mut list = WordList::parse_from_str("APPLE\nPEAR");
        let added = list.extend_unique(["PEAR", "FIG", "FIG", "PLUM"]);
        assert_eq!(added, 2);
        assert_eq!(list.words, vec!["APPLE", "PEAR", "FIG", "PLUM"]);
        assert!(list.contains("FIG"));
        assert!(!list.contains("fig"));
    }

    #[test]
    fn test_clean_words_filters_by_length_and_punctuation() {
        let input = [
            "short",
            "exactly8",
            "twenty-four-letters-long",
            "with space here",
            "abcdefghijklmnopqrstuvwxyz",
            "абвгдежзий",
        ];
        assert_eq!(clean_words(&input), vec!["абвгдежзий", "exactly8"]);
    }

    #[test]
    fn test_clean_words_sorts_longest_first_stably() {
        let input = ["aaaaaaaa", "bbbbbbbbbb", "cccccccc", "dddddddddd"];
        assert_eq!(
            clean_words(&input),
            vec!["bbbbbbbbbb", "dddddddddd", "aaaaaaaa", "cccccccc"]
        );
    }

    #[test]
    fn test_clean_words_bounds_are_inclusive() {
        let shortest = "a".repeat(CLEAN_MIN_LEN);
        let longest = "b".repeat(CLEAN_MAX_LEN);
        let too_long = "c".repeat(CLEAN_MAX_LEN + 1);
        let input = [shortest.clone(), longest.clone(), too_long];
        assert_eq!(clean_words(&input), vec![longest, shortest]);
    }

    #[test]
    fn test_normalize_include() {
        assert_eq!(normalize_include("  Ёлка "), "елка");
        assert_eq!(normalize_include("ЗВЁЗДЫ"), "звезды");
        assert_eq!(normalize_include("Pear"), "pear");
    }
}
