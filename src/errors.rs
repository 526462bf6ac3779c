//! Error types for grid-literal parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `InvalidInput` (Unexpected character in a grid literal)
//! - E002: `EmptyGrid` (Grid literal has no cells)
//! - E003: `UnterminatedTile` (Multi-letter tile is missing its closing `]`)
//! - E004: `EmptyTile` (Multi-letter tile has no letters)
//! - E005: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::ParseError;
//! use wordgrid::grid::Grid;
//!
//! match "C A T / [Qu".parse::<Grid>() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(grid) => println!("Parsed {} rows", grid.row_count()),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Errors raised while reading a grid literal such as `"C A T / X [Qu] X"`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid grid input: \"{str}\"")]
    InvalidInput { str: String },

    #[error("Grid literal contains no cells")]
    EmptyGrid,

    #[error("Unterminated tile: \"[{tile}\"")]
    UnterminatedTile { tile: String },

    #[error("Empty tile \"[]\" in row {row}")]
    EmptyTile { row: usize },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidInput { .. } => "E001",
            ParseError::EmptyGrid => "E002",
            ParseError::UnterminatedTile { .. } => "E003",
            ParseError::EmptyTile { .. } => "E004",
            ParseError::NomError(_) => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::InvalidInput { .. } => "Unexpected character in a grid literal",
            ParseError::EmptyGrid => "Grid literal has no cells",
            ParseError::UnterminatedTile { .. } => "Multi-letter tile is missing its closing bracket",
            ParseError::EmptyTile { .. } => "Multi-letter tile has no letters",
            ParseError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::InvalidInput { .. } => "The grid literal contains a character that cannot start a cell, a tile, or a row break.",
            ParseError::EmptyGrid => "After removing separators and blank rows nothing was left to search. A grid needs at least one cell.",
            ParseError::UnterminatedTile { .. } => "A '[' opened a multi-letter tile but no matching ']' was found before the end of the row.",
            ParseError::EmptyTile { .. } => "Brackets mark a single cell holding several letters; '[]' would be a cell holding nothing.",
            ParseError::NomError(_) => "The underlying nom combinators rejected the input. This usually accompanies one of the errors above.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyGrid => Some("Example: 'CAT/DOG/EEL' or 'C A T / D O G'"),
            ParseError::UnterminatedTile { .. } => Some("Close multi-letter tiles with ']' (e.g., 'A [Qu] T')"),
            ParseError::EmptyTile { .. } => Some("Put at least one letter between the brackets or drop them"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::EmptyGrid;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<ParseError> = vec![
            ParseError::InvalidInput { str: "]".to_string() },
            ParseError::EmptyGrid,
            ParseError::UnterminatedTile { tile: "Qu".to_string() },
            ParseError::EmptyTile { row: 0 },
            ParseError::NomError(ErrorKind::Char),
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with('E'), "Error code '{}' should start with 'E'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = ParseError::InvalidInput { str: "]x".to_string() };
        assert_eq!(err.display_detailed(), "Invalid grid input: \"]x\" (E001)");
    }

    #[test]
    fn test_empty_tile_mentions_row() {
        let err = ParseError::EmptyTile { row: 3 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("row 3"));
        assert!(detailed.contains("E004"));
    }
}
