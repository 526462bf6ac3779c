use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::grid::Coord;

/// One letter of a word pinned to the cell chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub letter: char,
    pub at: Coord,
}

/// `PlacementPath` maps a word-letter index to the cell chosen for that letter.
///
/// Built one index at a time during a search attempt; a finished path holds
/// one entry per letter, indices `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementPath {
    steps: BTreeMap<usize, Placement>,
}

impl Display for PlacementPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .iter()
            .map(|(i, p)| format!("{i}:{}→({})", p.letter, p.at))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl PlacementPath {
    /// Pin the letter at `index` to `at`, replacing any earlier choice.
    pub(crate) fn set(&mut self, index: usize, letter: char, at: Coord) {
        self.steps.insert(index, Placement { letter, at });
    }

    /// Forget every placement.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.steps.get(&index)
    }

    /// Cell chosen for the letter at `index`, if any.
    #[must_use]
    pub fn coord(&self, index: usize) -> Option<Coord> {
        self.steps.get(&index).map(|p| p.at)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Placements in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.steps.iter().map(|(&i, p)| (i, p))
    }

    /// Chosen cells in index order.
    #[must_use]
    pub fn coords(&self) -> Vec<Coord> {
        self.steps.values().map(|p| p.at).collect()
    }
}

/// Wire form: `{ "0": { "C": "0 0" }, "1": { "A": "0 1" }, ... }`.
impl Serialize for PlacementPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (index, placement) in &self.steps {
            map.serialize_entry(index, &LetterAt(placement))?;
        }
        map.end()
    }
}

struct LetterAt<'a>(&'a Placement);

impl Serialize for LetterAt<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.letter.to_string(), &self.0.at)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlacementPath {
        let mut path = PlacementPath::default();
        path.set(0, 'C', Coord::new(0, 0));
        path.set(1, 'A', Coord::new(0, 1));
        path.set(2, 'T', Coord::new(1, 2));
        path
    }

    #[test]
    fn test_set_and_get() {
        let path = sample();
        assert_eq!(path.len(), 3);
        assert_eq!(path.coord(2), Some(Coord::new(1, 2)));
        assert_eq!(path.get(1).map(|p| p.letter), Some('A'));
        assert_eq!(path.coord(3), None);
    }

    #[test]
    fn test_set_replaces_existing_index() {
        let mut path = sample();
        path.set(1, 'A', Coord::new(1, 1));
        assert_eq!(path.len(), 3);
        assert_eq!(path.coord(1), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_clear() {
        let mut path = sample();
        path.clear();
        assert!(path.is_empty());
    }

    #[test]
    fn test_coords_in_index_order() {
        let mut path = PlacementPath::default();
        path.set(1, 'B', Coord::new(2, 2));
        path.set(0, 'A', Coord::new(1, 1));
        assert_eq!(path.coords(), vec![Coord::new(1, 1), Coord::new(2, 2)]);
    }

    #[test]
    fn test_display() {
        let mut path = PlacementPath::default();
        path.set(0, 'O', Coord::new(0, 0));
        path.set(1, 'X', Coord::new(1, 1));
        assert_eq!(path.to_string(), "[0:O→(0 0), 1:X→(1 1)]");
    }

    #[test]
    fn test_serializes_to_index_letter_coord_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"0":{"C":"0 0"},"1":{"A":"0 1"},"2":{"T":"1 2"}}"#);
    }
}
