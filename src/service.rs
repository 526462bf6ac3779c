//! Word-list operations behind the HTTP routes and CLI commands.
//!
//! Every call re-reads the lists it needs; nothing is cached between calls.

use crate::errors::format_error_with_code_and_help;
use crate::requests::{LookupItem, MergeResponse, SearchRequest, UpdateWordsRequest};
use crate::scanner::{scan, ScanResult};
use crate::store::{
    ListLocation, StoreError, WordStore, DEFINITIONS, EXCLUDE, INCLUDE, MERGEABLE_DEFINITIONS, MERGED,
    MERGED_CLEANED,
};
use crate::word_list::{clean_words, normalize_include, WordList};
use instant::Instant;
use log::{debug, info, warn};
use std::collections::HashSet;

/// Include-list words shorter than this stay in the include list on merge.
pub const MERGE_MIN_LEN: usize = 4;

/// Lists searched by [`WordService::lookup_word`], in reporting order.
const LOOKUP_SOURCES: [ListLocation; 4] = [DEFINITIONS, MERGED, INCLUDE, EXCLUDE];

/// Errors raised by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Dictionary could not be loaded")]
    DictionaryUnavailable(#[source] StoreError),

    #[error("Dictionary is empty")]
    EmptyDictionary,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::DictionaryUnavailable(_) => "W001",
            ServiceError::EmptyDictionary => "W002",
            ServiceError::Store(_) => "W003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ServiceError::DictionaryUnavailable(_) => "Base dictionary could not be read",
            ServiceError::EmptyDictionary => "Base dictionary has no words",
            ServiceError::Store(_) => "A word list could not be read or written",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ServiceError::DictionaryUnavailable(_) => "A search needs resources/definitions.txt. The secondary list resources/merged.txt is optional, the base dictionary is not.",
            ServiceError::EmptyDictionary => "resources/definitions.txt was read but contained no words, so there is nothing to search for.",
            ServiceError::Store(_) => "A list file needed by the operation was missing or could not be written. The wrapped store error names the file.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ServiceError::DictionaryUnavailable(_) | ServiceError::EmptyDictionary => {
                Some("Put one word per line in resources/definitions.txt under the data directory")
            }
            ServiceError::Store(e) => e.help(),
        }
    }

    /// The error message including the underlying store error, if any.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ServiceError::DictionaryUnavailable(e) => format!("{self}: {e}"),
            _ => self.to_string(),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.message(), self.code(), self.help())
    }
}

/// Runs searches and list maintenance against one [`WordStore`].
#[derive(Debug, Clone)]
pub struct WordService {
    store: WordStore,
}

impl WordService {
    #[must_use]
    pub fn new(store: WordStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Base dictionary plus the merged list, duplicates dropped, load order kept.
    fn load_dictionary(&self) -> Result<WordList, ServiceError> {
        let lines = self.store.read_lines(DEFINITIONS).map_err(ServiceError::DictionaryUnavailable)?;
        let mut dictionary = WordList::from(lines);
        if dictionary.is_empty() {
            return Err(ServiceError::EmptyDictionary);
        }

        match self.store.read_lines(MERGED) {
            Ok(merged) => {
                let total = merged.len();
                let added = dictionary.extend_unique(WordList::from(merged).words);
                debug!("merged list added {added} of {total} words");
            }
            Err(e) => warn!("merged list skipped: {e}"),
        }
        Ok(dictionary)
    }

    /// Find the longest dictionary words traceable in the request's grid.
    ///
    /// # Errors
    ///
    /// Fails when the base dictionary is missing or empty.
    pub fn search(&self, request: &SearchRequest) -> Result<ScanResult, ServiceError> {
        let t_search = Instant::now();
        let dictionary = self.load_dictionary()?;

        if request.letters_matrix.row_count() == 0 {
            debug!("search with no grid rows");
            return Ok(ScanResult::default());
        }
        let grid = request.letters_matrix.normalized_to_first_row();

        debug!(
            "length filters min={} max={} are not applied",
            request.min_length.0, request.max_length.0
        );

        let result = scan(&dictionary.words, &grid, request.max_words.as_count());
        info!(
            "search over {} words returned {} in {:.3}s",
            dictionary.len(),
            result.len(),
            t_search.elapsed().as_secs_f64()
        );
        Ok(result)
    }

    /// Append new words to the include or exclude list. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Fails when the list cannot be written.
    pub fn update_words(&self, request: &UpdateWordsRequest) -> Result<usize, ServiceError> {
        let location = if request.include { INCLUDE } else { EXCLUDE };

        let existing = self.store.read_lines(location).unwrap_or_else(|e| {
            debug!("treating unreadable list as empty: {e}");
            Vec::new()
        });
        let mut seen: HashSet<&str> = existing.iter().map(String::as_str).collect();
        let new_words: Vec<&str> = request
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| seen.insert(*word))
            .collect();

        if !new_words.is_empty() {
            self.store.append(&new_words, location)?;
        }
        info!("added {} words to {}", new_words.len(), location.1);
        Ok(new_words.len())
    }

    /// The include list when `include`, else the exclude list.
    ///
    /// # Errors
    ///
    /// Fails when the list is missing or unreadable.
    pub fn get_list(&self, include: bool) -> Result<Vec<String>, ServiceError> {
        let location = if include { INCLUDE } else { EXCLUDE };
        Ok(self.store.read_lines(location)?)
    }

    /// Move include-list words that the dictionary lacks into the mergeable list.
    ///
    /// Words shorter than [`MERGE_MIN_LEN`] letters, or holding a space or a
    /// hyphen, are left alone. The rest are compared in normalized form
    /// ([`normalize_include`]).
    ///
    /// # Errors
    ///
    /// Fails when the include list is missing or a list cannot be written.
    pub fn merge_words(&self) -> Result<MergeResponse, ServiceError> {
        let includes = self.store.read_lines(INCLUDE)?;

        let mut dictionary: HashSet<String> = HashSet::new();
        match self.store.read_lines(DEFINITIONS) {
            Ok(definitions) => {
                dictionary.extend(definitions);
                dictionary.extend(self.store.read_lines(MERGED).unwrap_or_default());
            }
            Err(e) => warn!("merging against an empty dictionary: {e}"),
        }

        let candidates = includes
            .iter()
            .filter(|include| include.chars().count() >= MERGE_MIN_LEN && !include.contains(['-', ' ']))
            .map(|include| normalize_include(include))
            .filter(|normalized| !dictionary.contains(normalized));
        let mut mergeable = WordList::default();
        mergeable.extend_unique(candidates);

        if !mergeable.is_empty() {
            self.store.overwrite(&mergeable.words, MERGEABLE_DEFINITIONS)?;
        }

        let merged: HashSet<&str> = mergeable.words.iter().map(String::as_str).collect();
        let remaining: Vec<&String> = includes
            .iter()
            .filter(|include| !merged.contains(normalize_include(include).as_str()))
            .collect();
        self.store.overwrite(&remaining, INCLUDE)?;

        info!(
            "merged {} include words, {} remain",
            mergeable.len(),
            remaining.len()
        );
        Ok(MergeResponse {
            added_count: mergeable.len(),
            removed_count: 0,
        })
    }

    /// Write the cleaned merged list to `data/merged_cleaned.txt`.
    ///
    /// # Errors
    ///
    /// Fails when the merged list is missing or the output cannot be written.
    pub fn clean_merge(&self) -> Result<String, ServiceError> {
        let input = self.store.read_lines(MERGED)?;
        let output = clean_words(&input);
        self.store.overwrite(&output, MERGED_CLEANED)?;
        info!("clean merge kept {} of {} lines", output.len(), input.len());
        Ok(format!("Processed {} lines.", input.len()))
    }

    /// Every line matching `word` across the dictionary and the curated lists.
    ///
    /// Lists that cannot be read are skipped.
    #[must_use]
    pub fn lookup_word(&self, word: &str, exact_match: bool) -> Vec<LookupItem> {
        let needle = word.to_lowercase();
        let mut items = Vec::new();

        for location in LOOKUP_SOURCES {
            let lines = match self.store.read_lines(location) {
                Ok(lines) => lines,
                Err(e) => {
                    debug!("lookup skipping list: {e}");
                    continue;
                }
            };
            for (i, line) in lines.iter().enumerate() {
                let hit = if exact_match {
                    line.to_lowercase() == needle
                } else {
                    line.to_lowercase().contains(&needle)
                };
                if hit {
                    items.push(LookupItem {
                        word: line.clone(),
                        found: true,
                        source: location.1.to_string(),
                        line: i + 1,
                    });
                }
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::requests::FlexInt;
    use std::fs;
    use tempfile::TempDir;

    fn service_with(lists: &[(ListLocation, &str)]) -> (TempDir, WordService) {
        let dir = TempDir::new().unwrap();
        for &((sub, file), contents) in lists {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join(file), contents).unwrap();
        }
        fs::create_dir_all(dir.path().join("data")).unwrap();
        let service = WordService::new(WordStore::new(dir.path()));
        (dir, service)
    }

    fn fruit_request(max_words: i64) -> SearchRequest {
        SearchRequest {
            max_words: FlexInt(max_words),
            letters_matrix: Grid::from(vec![
                vec!["P", "E", "A", "R"],
                vec!["K", "I", "W", "I"],
                vec!["X", "X", "X", "X"],
            ]),
            ..SearchRequest::default()
        }
    }

    #[test]
    fn test_search_ranks_and_limits() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "APPLE\nPEAR\nKIWI\n")]);
        let result = service.search(&fruit_request(1)).unwrap();
        assert_eq!(result.words(), vec!["PEAR"]);
    }

    #[test]
    fn test_search_appends_merged_list() {
        let (_dir, service) = service_with(&[
            (DEFINITIONS, "PE\nPEAR\n"),
            (MERGED, "PEAR\nKIWI\n"),
        ]);
        let result = service.search(&fruit_request(10)).unwrap();
        assert_eq!(result.words(), vec!["PEAR", "KIWI", "PE"]);
    }

    #[test]
    fn test_search_requires_dictionary() {
        let (_dir, service) = service_with(&[(MERGED, "PEAR\n")]);
        let err = service.search(&fruit_request(10)).unwrap_err();
        assert_eq!(err.code(), "W001");
        assert!(err.display_detailed().contains("definitions.txt"));
    }

    #[test]
    fn test_search_rejects_empty_dictionary() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "\n\n")]);
        let err = service.search(&fruit_request(10)).unwrap_err();
        assert!(matches!(err, ServiceError::EmptyDictionary));
    }

    #[test]
    fn test_search_without_rows_is_empty() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "PEAR\n")]);
        let request = SearchRequest { max_words: FlexInt(5), ..SearchRequest::default() };
        assert!(service.search(&request).unwrap().is_empty());
    }

    #[test]
    fn test_search_negative_limit_returns_nothing() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "PEAR\n")]);
        assert!(service.search(&fruit_request(-3)).unwrap().is_empty());
    }

    #[test]
    fn test_search_pads_ragged_rows() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "CAT\nCATS\n")]);
        let request = SearchRequest {
            max_words: FlexInt(5),
            letters_matrix: Grid::from(vec![vec!["C", "A", "T"], vec!["X"], vec!["X", "X", "X", "S"]]),
            ..SearchRequest::default()
        };
        assert_eq!(service.search(&request).unwrap().words(), vec!["CAT"]);
    }

    #[test]
    fn test_update_words_appends_only_new() {
        let (_dir, service) = service_with(&[(INCLUDE, "pear\n")]);
        let request = UpdateWordsRequest {
            words: vec!["pear".into(), "kiwi".into(), "fig".into(), "kiwi".into()],
            include: true,
        };
        assert_eq!(service.update_words(&request).unwrap(), 2);
        assert_eq!(service.get_list(true).unwrap(), vec!["pear", "kiwi", "fig"]);
    }

    #[test]
    fn test_update_words_creates_exclude_list() {
        let (_dir, service) = service_with(&[]);
        let request = UpdateWordsRequest { words: vec!["plum".into()], include: false };
        assert_eq!(service.update_words(&request).unwrap(), 1);
        assert_eq!(service.get_list(false).unwrap(), vec!["plum"]);
    }

    #[test]
    fn test_get_list_missing_is_error() {
        let (_dir, service) = service_with(&[]);
        let err = service.get_list(true).unwrap_err();
        assert!(matches!(err, ServiceError::Store(ref e) if e.is_not_found()));
        assert_eq!(err.code(), "W003");
    }

    #[test]
    fn test_merge_words() {
        let (_dir, service) = service_with(&[
            (DEFINITIONS, "елка\n"),
            (INCLUDE, "Ёлка\nКИВИ\nкиви\nок\nиван-чай\nнет слов\nГруша\n"),
        ]);
        let response = service.merge_words().unwrap();
        assert_eq!(response, MergeResponse { added_count: 2, removed_count: 0 });

        let mergeable = service.store().read_lines(MERGEABLE_DEFINITIONS).unwrap();
        assert_eq!(mergeable, vec!["киви", "груша"]);

        let remaining = service.get_list(true).unwrap();
        assert_eq!(remaining, vec!["Ёлка", "ок", "иван-чай", "нет слов"]);
    }

    #[test]
    fn test_merge_words_nothing_to_merge_keeps_mergeable_list() {
        let (_dir, service) = service_with(&[
            (DEFINITIONS, "pear\n"),
            (INCLUDE, "PEAR\nfig\n"),
            (MERGEABLE_DEFINITIONS, "plum\n"),
        ]);
        let response = service.merge_words().unwrap();
        assert_eq!(response.added_count, 0);
        assert_eq!(service.store().read_lines(MERGEABLE_DEFINITIONS).unwrap(), vec!["plum"]);
        assert_eq!(service.get_list(true).unwrap(), vec!["PEAR", "fig"]);
    }

    #[test]
    fn test_merge_words_large_include_list() {
        let mut includes = String::new();
        for i in 0..5000 {
            includes.push_str(&format!("Word{i:05}\nword{i:05}\n"));
        }
        let (_dir, service) = service_with(&[(DEFINITIONS, "word00000\n"), (INCLUDE, includes.as_str())]);

        let response = service.merge_words().unwrap();
        assert_eq!(response.added_count, 4999);

        let mergeable = service.store().read_lines(MERGEABLE_DEFINITIONS).unwrap();
        assert_eq!(mergeable.len(), 4999);
        assert_eq!(mergeable[0], "word00001");
        assert_eq!(mergeable[4998], "word04999");
        assert_eq!(service.get_list(true).unwrap(), vec!["Word00000", "word00000"]);
    }

    #[test]
    fn test_merge_words_requires_include_list() {
        let (_dir, service) = service_with(&[(DEFINITIONS, "pear\n")]);
        assert!(service.merge_words().is_err());
    }

    #[test]
    fn test_clean_merge() {
        let (_dir, service) = service_with(&[(MERGED, "short\nlongerword\ntwo words here\nwatermelons\n")]);
        assert_eq!(service.clean_merge().unwrap(), "Processed 4 lines.");
        assert_eq!(
            service.store().read_lines(MERGED_CLEANED).unwrap(),
            vec!["watermelons", "longerword"]
        );
    }

    #[test]
    fn test_lookup_word_exact_and_substring() {
        let (_dir, service) = service_with(&[
            (DEFINITIONS, "PEAR\nAPPLE\n"),
            (MERGED, "pearl\n"),
            (EXCLUDE, "spear\n"),
        ]);

        let exact = service.lookup_word("pear", true);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].source, "definitions.txt");
        assert_eq!(exact[0].line, 1);

        let partial = service.lookup_word("Pear", false);
        let sources: Vec<&str> = partial.iter().map(|i| i.source.as_str()).collect();
        assert_eq!(sources, vec!["definitions.txt", "merged.txt", "exclude.txt"]);
        assert!(partial.iter().all(|i| i.found));
    }
}
