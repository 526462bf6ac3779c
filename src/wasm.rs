use crate::errors::ParseError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::scanner::{scan, WordMatch};
use crate::word_list::WordList;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<Box<ParseError>> for WasmError {
    fn from(e: Box<ParseError>) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(e: serde_wasm_bindgen::Error, what: &str) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(Serialize)]
struct WasmStep {
    letter: String,
    row: usize,
    col: usize,
}

#[derive(Serialize)]
struct WasmMatch {
    word: String,
    path: Vec<WasmStep>,
}

impl From<WordMatch> for WasmMatch {
    fn from(m: WordMatch) -> Self {
        let path = m
            .path
            .iter()
            .map(|(_, p)| WasmStep { letter: p.letter.to_string(), row: p.at.row, col: p.at.col })
            .collect();
        WasmMatch { word: m.word, path }
    }
}

/// JS entry: (grid: string[][], dictionary: string[], limit: number)
/// returns Array<{ word, path: Array<{ letter, row, col }> }>, longest first
#[wasm_bindgen]
pub fn scan_grid_wasm(grid: JsValue, dictionary: JsValue, limit: usize) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(grid).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("grid must be string[][]: {e}"),
        description: "Invalid grid format".to_string(),
        details: "The grid parameter must be a JavaScript array of rows, each an array of cell strings.".to_string(),
        help: Some("Pass rows of cells, e.g., [['C', 'A', 'T'], ['D', 'O', 'G']]".to_string()),
    })?;
    let words: Vec<String> = serde_wasm_bindgen::from_value(dictionary).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("dictionary must be string[]: {e}"),
        description: "Invalid dictionary format".to_string(),
        details: "The dictionary parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['CAT', 'DOG']".to_string()),
    })?;

    let grid = Grid::new(rows).normalized_to_first_row();
    let matches: Vec<WasmMatch> = scan(&words, &grid, limit).into_iter().map(WasmMatch::from).collect();

    to_value(&matches).map_err(|e| serialization_error(e, "scan result"))
}

/// JS entry: parse a grid literal such as `"C A T / X [Qu] X"` into string[][].
#[wasm_bindgen]
pub fn parse_grid_wasm(text: &str) -> Result<JsValue, JsValue> {
    let grid: Grid = text.parse().map_err(WasmError::from)?;
    to_value(grid.rows()).map_err(|e| serialization_error(e, "grid"))
}

/// Parse a newline-separated word list. Returns the words as a JS string array.
///
/// # Errors
/// Returns a `JsValue` error if the words cannot be converted.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    to_value(&word_list.words).map_err(|e| serialization_error(e, "word list"))
}

/// Generate a debug report users can copy/paste when reporting issues.
#[wasm_bindgen]
pub fn get_debug_info(grid_text: &str, error_message: &str, dictionary_size: usize, limit: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid: {}", grid_text);
    let _ = writeln!(&mut report, "Dictionary Size: {}", dictionary_size);
    let _ = writeln!(&mut report, "Words Requested: {}", limit);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("CAT/DOG", "Grid literal contains no cells (E002)", 1000, 10);

        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDGRID DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(lines[2].starts_with("Generated: "));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "Grid literal contains no cells (E002)");
        assert_eq!(lines[7], "## Input");
        assert_eq!(lines[8], "Grid: CAT/DOG");
        assert_eq!(lines[9], "Dictionary Size: 1000");
        assert_eq!(lines[10], "Words Requested: 10");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_wasm_match_flattens_path() {
        let grid = Grid::from(vec![vec!["C", "A", "T"]]);
        let m = scan(&["CAT"], &grid, 1).into_iter().next().unwrap();
        let wasm = WasmMatch::from(m);
        assert_eq!(wasm.word, "CAT");
        let cols: Vec<usize> = wasm.path.iter().map(|s| s.col).collect();
        assert_eq!(cols, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_error_converts_with_help() {
        let err = "[]".parse::<Grid>().unwrap_err();
        let wasm = WasmError::from(err);
        assert_eq!(wasm.code, "E004");
        assert!(wasm.help.is_some());
    }
}
