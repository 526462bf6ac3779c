//! Trace one word through one grid.
//!
//! The search is a greedy walk with a one-branch lookahead, not an exhaustive
//! backtracking search:
//!
//! 1. Every cell whose text is exactly the word's first letter is a candidate
//!    start (case-sensitive). Candidates are tried in row-major order.
//! 2. From a start, letters are placed one by one. The cell for letter `w` must
//!    match it case-insensitively, touch the cell of letter `w - 1`, and pass
//!    [`Matcher::has_continuation`]. The first such cell in row-major order
//!    (scanning from one row and column before the previous placement) wins;
//!    if none exists the attempt is abandoned without revisiting earlier picks.
//! 3. After a failed attempt the recovery anchor steps through a fixed
//!    [`RECOVERY_WINDOW`]-sized square and, while it keeps moving, the first
//!    exact first-letter cell at or after it seeds a new attempt from letter 1.
//!
//! Consumed cells are tracked with marks over the caller's grid and restored
//! on reset, so the caller's grid is never modified.

use crate::grid::{letter_matches_cell, letters_match, Coord, Grid};
use crate::placement::PlacementPath;
use log::trace;

/// Side of the square the recovery anchor is allowed to step through.
pub(crate) const RECOVERY_WINDOW: usize = 5;

/// Result of tracing one word. A failed search carries an empty string and path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    /// Concatenated text of the chosen cells (the grid's spelling).
    pub found_string: String,
    pub path: PlacementPath,
}

impl SearchOutcome {
    fn not_found() -> Self {
        Self::default()
    }
}

/// Try to trace `word` through `grid`.
///
/// An empty word or an empty grid is simply not found.
///
/// ```
/// use wordgrid::grid::{Coord, Grid};
/// use wordgrid::matcher::search;
///
/// let grid = Grid::from(vec![vec!["C", "A", "T"], vec!["X", "X", "X"]]);
/// let outcome = search("CAT", &grid);
/// assert!(outcome.found);
/// assert_eq!(outcome.path.coord(2), Some(Coord::new(0, 2)));
/// ```
#[must_use]
pub fn search(word: &str, grid: &Grid) -> SearchOutcome {
    if word.is_empty() || grid.is_empty() {
        return SearchOutcome::not_found();
    }

    let mut matcher = Matcher::new(word, grid);
    if matcher.run() {
        matcher.into_outcome()
    } else {
        SearchOutcome::not_found()
    }
}

/// Move the recovery anchor one step inside the window.
///
/// The column advances; past the window's last column it wraps to
/// `col % (RECOVERY_WINDOW - 1)` on the next row. A step that would leave the
/// window is discarded and the anchor stays put, which ends recovery.
pub(crate) fn step_anchor(anchor: Coord) -> Coord {
    let last = RECOVERY_WINDOW - 1;
    if anchor.row > last || anchor.col > last {
        return anchor;
    }

    let mut stepped = Coord::new(anchor.row, anchor.col + 1);
    if stepped.col > last {
        stepped.col %= last;
        stepped.row += 1;
    }

    if stepped.row > last || stepped.col > last {
        anchor
    } else {
        stepped
    }
}

/// Working state for one word: consumed marks, output, path and recovery anchor.
struct Matcher<'a> {
    grid: &'a Grid,
    target: &'a str,
    letters: Vec<char>,
    first_letter: String,
    consumed: Vec<Vec<bool>>,
    found: String,
    path: PlacementPath,
    anchor: Coord,
}

impl<'a> Matcher<'a> {
    fn new(target: &'a str, grid: &'a Grid) -> Self {
        let letters: Vec<char> = target.chars().collect();
        let first_letter = letters.first().map(char::to_string).unwrap_or_default();
        let consumed = grid.rows().iter().map(|row| vec![false; row.len()]).collect();

        Self {
            grid,
            target,
            letters,
            first_letter,
            consumed,
            found: String::with_capacity(target.len()),
            path: PlacementPath::default(),
            anchor: Coord::ORIGIN,
        }
    }

    fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            found: true,
            found_string: self.found,
            path: self.path,
        }
    }

    fn run(&mut self) -> bool {
        let grid = self.grid;
        let starts: Vec<Coord> = grid
            .cells()
            .filter(|(_, cell)| *cell == self.first_letter)
            .map(|(at, _)| at)
            .collect();

        if starts.is_empty() {
            trace!("{}: no cell holds '{}'", self.target, self.first_letter);
            return false;
        }

        starts.into_iter().any(|start| self.attempt_from(start))
    }

    /// One candidate start, followed by recovery attempts until the anchor stops moving.
    fn attempt_from(&mut self, start: Coord) -> bool {
        self.reset();
        if self.place_from(0, start) {
            return true;
        }

        loop {
            let previous = self.anchor;
            self.anchor = step_anchor(previous);
            if self.anchor == previous || !self.seed_from_anchor() {
                return false;
            }
            trace!("{}: retrying from anchor ({})", self.target, self.anchor);
            if self.place_from(1, Coord::ORIGIN) {
                return true;
            }
        }
    }

    /// Place letters `first_index..` in order, scanning from `window`.
    fn place_from(&mut self, first_index: usize, mut window: Coord) -> bool {
        for index in first_index..self.letters.len() {
            let Some(at) = self.find_eligible(index, window) else {
                return false;
            };

            self.place(index, at);
            if index == 0 {
                self.anchor = at;
            }
            if letters_match(&self.found, self.target) {
                return true;
            }

            window = Coord::new(at.row.saturating_sub(1), at.col.saturating_sub(1));
        }

        false
    }

    fn find_eligible(&mut self, index: usize, window: Coord) -> Option<Coord> {
        for row in window.row..self.grid.row_count() {
            let first_col = if row == window.row { window.col } else { 0 };
            for col in first_col..self.grid.row_len(row) {
                let at = Coord::new(row, col);
                if self.cell_matches(at, index)
                    && self.follows_previous(at, index)
                    && self.has_continuation(at, index)
                {
                    return Some(at);
                }
            }
        }
        None
    }

    /// Re-seed letter 0 at the first exact first-letter cell at or after the anchor.
    fn seed_from_anchor(&mut self) -> bool {
        self.reset();

        let grid = self.grid;
        let anchor = self.anchor;
        let seed = (anchor.row..grid.row_count())
            .flat_map(|row| {
                let first_col = if row == anchor.row { anchor.col } else { 0 };
                (first_col..grid.row_len(row)).map(move |col| Coord::new(row, col))
            })
            .find(|&at| grid.get(at) == Some(self.first_letter.as_str()));

        match seed {
            Some(at) => {
                self.place(0, at);
                true
            }
            None => false,
        }
    }

    fn cell_matches(&self, at: Coord, index: usize) -> bool {
        !self.is_consumed(at)
            && self
                .grid
                .get(at)
                .is_some_and(|cell| letter_matches_cell(self.letters[index], cell))
    }

    fn follows_previous(&self, at: Coord, index: usize) -> bool {
        if index == 0 {
            return true;
        }
        self.path
            .coord(index - 1)
            .is_some_and(|previous| previous.is_neighbor_of(at))
    }

    /// Lookahead: can the letter after `index` be reached from `at`, and so on?
    ///
    /// Trivially true for the first and last letters. Otherwise some neighbor of
    /// `at` (bounded by row 0's width) must match the next letter and, with `at`
    /// marked consumed, pass the same test one letter further on.
    fn has_continuation(&mut self, at: Coord, index: usize) -> bool {
        let last = self.letters.len() - 1;
        if index == 0 || index >= last {
            return true;
        }

        let next = index + 1;
        let neighbors: Vec<Coord> = at.neighbors(self.grid.row_count(), self.grid.width()).collect();
        for neighbor in neighbors {
            if !self.cell_matches(neighbor, next) {
                continue;
            }
            if next == last {
                return true;
            }

            let was_consumed = self.mark(at, true);
            let reachable = self.has_continuation(neighbor, next);
            self.mark(at, was_consumed);

            if reachable {
                return true;
            }
        }

        false
    }

    fn place(&mut self, index: usize, at: Coord) {
        if let Some(cell) = self.grid.get(at) {
            self.found.push_str(cell);
        }
        self.mark(at, true);
        self.path.set(index, self.letters[index], at);
    }

    fn reset(&mut self) {
        for row in &mut self.consumed {
            row.fill(false);
        }
        self.found.clear();
        self.path.clear();
    }

    fn is_consumed(&self, at: Coord) -> bool {
        self.consumed
            .get(at.row)
            .and_then(|row| row.get(at.col))
            .copied()
            .unwrap_or(true)
    }

    /// Set the consumed mark at `at`, returning the previous mark.
    fn mark(&mut self, at: Coord, consumed: bool) -> bool {
        match self.consumed.get_mut(at.row).and_then(|row| row.get_mut(at.col)) {
            Some(slot) => std::mem::replace(slot, consumed),
            None => true,
        }
    }
}
