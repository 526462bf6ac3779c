//! Scan a dictionary against a grid and rank what can be traced.
//!
//! For each dictionary word, in order:
//!
//! 1. Skip it if the same text is already among the matches.
//! 2. Skip it without searching unless every letter appears as the first
//!    letter of some cell (case-sensitive; see [`Grid::leading_letters`]).
//! 3. Trace it with [`search`] and keep it only when the traced text equals
//!    the word, ignoring case.
//!
//! Matches are then stably sorted longest first, so equal lengths keep their
//! dictionary order, and cut to the requested count.
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//! use wordgrid::scanner;
//!
//! let grid = Grid::from(vec![
//!     vec!["P", "E", "A", "R"],
//!     vec!["K", "I", "W", "I"],
//! ]);
//! let result = scanner::scan(&["APPLE", "PEAR", "KIWI"], &grid, 1);
//! assert_eq!(result.words(), vec!["PEAR"]);
//! ```

use crate::grid::{letters_match, Grid};
use crate::matcher::search;
use crate::placement::PlacementPath;
use instant::Instant;
use log::debug;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A dictionary word traced through the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// The word as spelled by the grid's cells.
    pub word: String,
    pub path: PlacementPath,
}

impl WordMatch {
    /// Length in letters (code points), the ranking key.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl Display for WordMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.path)
    }
}

/// Counters gathered during one scan, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Dictionary entries looked at.
    pub examined: usize,
    /// Entries skipped because the same text was already matched.
    pub duplicates: usize,
    /// Entries rejected by the letter prefilter.
    pub prefiltered: usize,
    /// Entries handed to the matcher.
    pub searched: usize,
    /// Entries accepted before ranking and truncation.
    pub matched: usize,
}

/// Ranked matches from one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Longest first, ties in dictionary order, at most `limit` entries.
    pub matches: Vec<WordMatch>,
    pub stats: ScanStats,
}

impl ScanResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched words in rank order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.word.as_str()).collect()
    }
}

impl IntoIterator for ScanResult {
    type Item = WordMatch;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Wire form: an object keyed by word, emitted in rank order.
impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.matches.iter().map(|m| (&m.word, &m.path)))
    }
}

/// Scan `dictionary` against `grid` and return at most `limit` ranked matches.
pub fn scan<S: AsRef<str>>(dictionary: &[S], grid: &Grid, limit: usize) -> ScanResult {
    let t_scan = Instant::now();
    let letters = grid.leading_letters();

    let mut stats = ScanStats::default();
    let mut matches: Vec<WordMatch> = Vec::new();
    let mut recorded: HashSet<String> = HashSet::new();

    for entry in dictionary {
        let word = entry.as_ref();
        stats.examined += 1;

        if recorded.contains(word) {
            stats.duplicates += 1;
            continue;
        }

        // Cheap letter prefilter
        if !letters.covers(word) {
            stats.prefiltered += 1;
            continue;
        }

        stats.searched += 1;
        let outcome = search(word, grid);
        if !outcome.found || !letters_match(word, &outcome.found_string) {
            continue;
        }

        if recorded.insert(outcome.found_string.clone()) {
            matches.push(WordMatch {
                word: outcome.found_string,
                path: outcome.path,
            });
        }
    }

    stats.matched = matches.len();

    // stable: equal lengths keep dictionary order
    matches.sort_by(|a, b| b.len().cmp(&a.len()));
    matches.truncate(limit);

    debug!(
        "scanned {} entries in {:.3}s: {} prefiltered, {} searched, {} matched, {} returned",
        stats.examined,
        t_scan.elapsed().as_secs_f64(),
        stats.prefiltered,
        stats.searched,
        stats.matched,
        matches.len()
    );

    debug_assert!(matches.len() <= limit);
    debug_assert!(matches.windows(2).all(|w| w[0].len() >= w[1].len()));

    ScanResult { matches, stats }
}
