//! The letter grid and the small helpers every search step leans on.
//!
//! A [`Grid`] is a list of rows of cells. A cell is a short piece of text,
//! usually one letter but sometimes a whole tile such as `"Qu"`. Rows may be
//! ragged; the width of row 0 is what neighbor lookups treat as the column
//! bound.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Letter recorded for a cell with no text when building the grid's alphabet.
pub const EMPTY_CELL_LETTER: char = '*';

/// Zero-based `(row, col)` position in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is one of the eight cells surrounding `self`.
    #[must_use]
    pub fn is_neighbor_of(&self, other: Coord) -> bool {
        self != &other && self.row.abs_diff(other.row) < 2 && self.col.abs_diff(other.col) < 2
    }

    /// The in-bounds 8-neighbors of `self`, row-major (upper-left first).
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                (row < rows && col < cols).then_some(Coord { row, col })
            })
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Serialized in the `"row col"` form the word-list clients expect.
impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Case-insensitive comparison of two pieces of text.
#[must_use]
pub fn letters_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive comparison of a single word letter against a cell's full text.
///
/// A multi-letter tile never equals a single letter.
#[must_use]
pub fn letter_matches_cell(letter: char, cell: &str) -> bool {
    letter.to_lowercase().eq(cell.chars().flat_map(char::to_lowercase))
}

/// A rectangular (possibly ragged) arrangement of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// True when there is nothing to search: no rows, or an empty first row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.first().map_or(true, Vec::is_empty)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column bound used for neighbor lookups: the width of row 0.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Actual length of `row` (0 when out of range).
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&str> {
        self.rows.get(at.row)?.get(at.col).map(String::as_str)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &str)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row, col), cell.as_str()))
        })
    }

    /// Copy of this grid with every row padded (with empty cells) or cut to row 0's width.
    #[must_use]
    pub fn normalized_to_first_row(&self) -> Grid {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|row| (0..width).map(|col| row.get(col).cloned().unwrap_or_default()).collect())
            .collect();
        Grid { rows }
    }

    /// The set of first letters of every cell (case-sensitive).
    #[must_use]
    pub fn leading_letters(&self) -> LetterSet {
        LetterSet(
            self.cells()
                .map(|(_, cell)| cell.chars().next().unwrap_or(EMPTY_CELL_LETTER))
                .collect(),
        )
    }
}

impl From<Vec<Vec<&str>>> for Grid {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Grid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.rows.iter().map(|row| row.join(" ")).collect();
        write!(f, "{}", rendered.join(" / "))
    }
}

/// Letters available in a grid, used as a cheap prefilter before searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet(HashSet<char>);

impl LetterSet {
    /// True when every letter of `word` is present (exact, case-sensitive).
    #[must_use]
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|c| self.0.contains(&c))
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_in_corner() {
        let n: Vec<Coord> = Coord::new(0, 0).neighbors(3, 3).collect();
        assert_eq!(n, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn test_neighbors_in_middle_are_row_major() {
        let n: Vec<Coord> = Coord::new(1, 1).neighbors(3, 3).collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n.first(), Some(&Coord::new(0, 0)));
        assert_eq!(n.last(), Some(&Coord::new(2, 2)));
        assert!(!n.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_is_neighbor_of() {
        let c = Coord::new(2, 2);
        assert!(c.is_neighbor_of(Coord::new(1, 3)));
        assert!(c.is_neighbor_of(Coord::new(3, 3)));
        assert!(!c.is_neighbor_of(c));
        assert!(!c.is_neighbor_of(Coord::new(0, 2)));
        assert!(!c.is_neighbor_of(Coord::new(2, 4)));
    }

    #[test]
    fn test_coord_serializes_as_row_col_string() {
        let json = serde_json::to_string(&Coord::new(3, 1)).unwrap();
        assert_eq!(json, "\"3 1\"");
    }

    #[test]
    fn test_letters_match_ignores_case() {
        assert!(letters_match("Cat", "cAT"));
        assert!(letters_match("ёж", "ЁЖ"));
        assert!(!letters_match("cat", "cats"));
    }

    #[test]
    fn test_letter_matches_cell() {
        assert!(letter_matches_cell('a', "A"));
        assert!(!letter_matches_cell('q', "Qu"));
        assert!(!letter_matches_cell('a', ""));
    }

    #[test]
    fn test_is_empty() {
        assert!(Grid::default().is_empty());
        assert!(Grid::new(vec![vec![]]).is_empty());
        assert!(!Grid::from(vec![vec!["A"]]).is_empty());
    }

    #[test]
    fn test_ragged_rows_and_width() {
        let grid = Grid::from(vec![vec!["A", "B"], vec!["C"], vec!["D", "E", "F"]]);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.row_len(1), 1);
        assert_eq!(grid.row_len(2), 3);
        assert_eq!(grid.row_len(7), 0);
        assert_eq!(grid.get(Coord::new(2, 2)), Some("F"));
        assert_eq!(grid.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_normalized_to_first_row() {
        let grid = Grid::from(vec![vec!["A", "B"], vec!["C"], vec!["D", "E", "F"]]);
        let normalized = grid.normalized_to_first_row();
        assert_eq!(
            normalized,
            Grid::from(vec![vec!["A", "B"], vec!["C", ""], vec!["D", "E"]])
        );
    }

    #[test]
    fn test_leading_letters_use_first_char_only() {
        let grid = Grid::from(vec![vec!["Qu", "a"], vec!["", "T"]]);
        let letters = grid.leading_letters();
        assert!(letters.contains('Q'));
        assert!(!letters.contains('u'));
        assert!(letters.contains(EMPTY_CELL_LETTER));
        assert!(letters.covers("QaT"));
        assert!(!letters.covers("qat"));
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from(vec![vec!["C", "A"], vec!["Qu", "T"]]);
        assert_eq!(grid.to_string(), "C A / Qu T");
    }
}
