//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `ParseError`, `StoreError` and `ServiceError` via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;
use wordgrid::errors::ParseError;
use wordgrid::service::ServiceError;
use wordgrid::store::StoreError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::InvalidInput { str: "]C A T".to_string() },
        ParseError::EmptyGrid,
        ParseError::UnterminatedTile { tile: "Qu".to_string() },
        ParseError::EmptyTile { row: 1 },
        ParseError::NomError(nom::error::ErrorKind::Char),
    ]
}

fn not_found(path: &str) -> (PathBuf, io::Error) {
    (PathBuf::from(path), io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
}

fn all_store_error_variants() -> Vec<StoreError> {
    let (path, source) = not_found("resources/merged.txt");
    vec![
        StoreError::Read { path, source },
        StoreError::Write {
            path: PathBuf::from("data/include.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        },
    ]
}

fn all_service_error_variants() -> Vec<ServiceError> {
    let (path, source) = not_found("resources/definitions.txt");
    let (list_path, list_source) = not_found("data/exclude.txt");
    vec![
        ServiceError::DictionaryUnavailable(StoreError::Read { path, source }),
        ServiceError::EmptyDictionary,
        ServiceError::Store(StoreError::Read { path: list_path, source: list_source }),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Grid Literal Errors (E001–E005)](#grid-literal-errors)");
    println!("- [Word List Errors (F001–F002)](#word-list-errors)");
    println!("- [Service Errors (W001–W003)](#service-errors)\n");

    println!("## Grid Literal Errors\n");
    println!("Errors raised while reading a grid literal on the command line or in the browser.\n");
    generate_error_docs!(all_parse_error_variants());

    println!("## Word List Errors\n");
    println!("Errors raised while reading or writing the list files under the data directory.\n");
    generate_error_docs!(all_store_error_variants());

    println!("## Service Errors\n");
    println!("Errors returned by searches and list maintenance, and by the matching HTTP routes.\n");
    generate_error_docs!(all_service_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_codes_are_documented_once() {
        let mut codes: Vec<&'static str> = Vec::new();
        codes.extend(all_parse_error_variants().iter().map(ParseError::code));
        codes.extend(all_store_error_variants().iter().map(StoreError::code));
        codes.extend(all_service_error_variants().iter().map(ServiceError::code));

        let unique: HashSet<&str> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len(), "duplicate code in {codes:?}");
        assert_eq!(codes.len(), 10);
    }
}
