//! Text form of a grid, for the command line and the browser build.
//!
//! Rows are separated by `/` or a newline. Inside a row every letter is its
//! own cell; spaces, tabs and commas are ignored; `[Qu]` puts several letters
//! in one cell. Blank rows are dropped.
//!
//! ```
//! use wordgrid::grid::Grid;
//!
//! let grid: Grid = "C A T / X [Qu] X".parse().unwrap();
//! assert_eq!(grid.rows()[1], vec!["X", "Qu", "X"]);
//! ```

use crate::errors::ParseError;
use crate::grid::Grid;
use nom::{
    branch::alt,
    bytes::complete::{is_a, tag, take_till},
    character::complete::{one_of, satisfy},
    combinator::{map, opt, value},
    IResult,
    Parser,
};
use std::str::FromStr;

/// Parser result type: input, output, with our custom `ParseError`
type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

const ROW_BREAKS: &str = "/\n";
const SEPARATORS: &str = " \t,\r";

#[derive(Debug, Clone, PartialEq)]
enum GridToken {
    Cell(String),
    Tile(String),
    RowBreak,
    Separator,
}

impl FromStr for Grid {
    type Err = Box<ParseError>;

    fn from_str(raw_grid: &str) -> Result<Self, Self::Err> {
        let mut rest = raw_grid;
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();

        while !rest.is_empty() {
            let (next, token) = match grid_token(rest) {
                Ok(parsed) => parsed,
                Err(nom::Err::Failure(e)) => return Err(e),
                Err(_) => {
                    return Err(Box::new(ParseError::InvalidInput { str: rest.to_string() }));
                }
            };
            rest = next;

            match token {
                GridToken::Cell(cell) => row.push(cell),
                GridToken::Tile(tile) if tile.is_empty() => {
                    return Err(Box::new(ParseError::EmptyTile { row: rows.len() }));
                }
                GridToken::Tile(tile) => row.push(tile),
                GridToken::RowBreak => {
                    if !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                    }
                }
                GridToken::Separator => {}
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(Box::new(ParseError::EmptyGrid));
        }

        Ok(Grid::new(rows))
    }
}

// === Token parsers ===

fn separator(input: &'_ str) -> PResult<'_, GridToken> {
    value(GridToken::Separator, is_a(SEPARATORS)).parse(input)
}

fn row_break(input: &'_ str) -> PResult<'_, GridToken> {
    value(GridToken::RowBreak, one_of(ROW_BREAKS)).parse(input)
}

/// `[letters]`: one cell holding several letters. A tile may not span rows.
fn tile(input: &'_ str) -> PResult<'_, GridToken> {
    let (input, _) = tag("[").parse(input)?;
    let (input, body) = take_till(|c: char| c == ']' || c == '[' || ROW_BREAKS.contains(c)).parse(input)?;
    let (input, closed) = opt(tag("]")).parse(input)?;
    if closed.is_none() {
        return Err(nom::Err::Failure(Box::new(ParseError::UnterminatedTile {
            tile: body.to_string(),
        })));
    }
    let body: String = body.chars().filter(|c| !SEPARATORS.contains(*c)).collect();
    Ok((input, GridToken::Tile(body)))
}

fn letter(input: &'_ str) -> PResult<'_, GridToken> {
    map(
        satisfy(|c| c != '[' && c != ']' && !ROW_BREAKS.contains(c) && !SEPARATORS.contains(c)),
        |c| GridToken::Cell(c.to_string()),
    )
    .parse(input)
}

fn grid_token(input: &'_ str) -> PResult<'_, GridToken> {
    alt((separator, row_break, tile, letter)).parse(input)
}
