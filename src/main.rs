use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordgrid::errors::ParseError;
use wordgrid::grid::Grid;
use wordgrid::log::DEBUG_ENV_VAR;
use wordgrid::requests::{FlexInt, SearchRequest, UpdateWordsRequest};
use wordgrid::server;
use wordgrid::service::{ServiceError, WordService};
use wordgrid::store::{StoreError, WordStore};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Letter-grid word search and word-list maintenance
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Folder holding `resources/` and `data/`
    #[arg(long, env = "WORDGRID_DATA_DIR", default_value = ".", global = true)]
    data_dir: PathBuf,

    /// Log at debug level (also enabled by WORDGRID_DEBUG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "WORDGRID_PORT", default_value_t = server::DEFAULT_PORT)]
        port: u16,
    },
    /// Find the longest dictionary words traceable in a grid
    Search {
        /// Grid literal, e.g. "C A T / D O G / [Qu] E L"
        #[arg(short, long, required_unless_present = "grid_file", conflicts_with = "grid_file")]
        grid: Option<String>,

        /// File holding a grid literal
        #[arg(long)]
        grid_file: Option<PathBuf>,

        /// Maximum number of words to return
        #[arg(short = 'n', long, default_value_t = 100, allow_negative_numbers = true)]
        max_words: i64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Append words to the exclude list (or the include list with --include)
    Update {
        #[arg(long)]
        include: bool,

        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the exclude list (or the include list with --include)
    List {
        #[arg(long)]
        include: bool,
    },
    /// Move include-list words missing from the dictionary into the mergeable list
    Merge,
    /// Write a length-filtered, longest-first copy of the merged list
    CleanMerge,
    /// Find a word in every list
    Lookup {
        word: String,

        /// Match whole lines only (case-insensitive)
        #[arg(long)]
        exact: bool,
    },
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var(DEBUG_ENV_VAR).is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        if let Some(service_err) = e.downcast_ref::<ServiceError>() {
            eprintln!("Error: {}", service_err.display_detailed());
        } else if let Some(store_err) = e.downcast_ref::<StoreError>() {
            eprintln!("Error: {}", store_err.display_detailed());
        } else if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let service = WordService::new(WordStore::new(&cli.data_dir));

    match cli.command {
        Command::Serve { port } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
                server::serve(listener, service).await
            })?;
        }
        Command::Search { grid, grid_file, max_words, json } => {
            let literal = match (grid, grid_file) {
                (Some(literal), _) => literal,
                (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
                    std::io::Error::new(e.kind(), format!("failed to read grid from '{}': {e}", path.display()))
                })?,
                (None, None) => return Err("a grid is required (--grid or --grid-file)".into()),
            };
            let grid: Grid = literal.parse().map_err(|e: Box<ParseError>| *e)?;

            let request = SearchRequest {
                max_words: FlexInt(max_words),
                letters_matrix: grid,
                ..SearchRequest::default()
            };

            let t_search = Instant::now();
            let result = service.search(&request)?;
            let search_secs = t_search.elapsed().as_secs_f64();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for word_match in &result.matches {
                    println!("{word_match}");
                }
            }

            eprintln!(
                "Examined {} words; searched {} in {:.3}s ({} found, {} shown).",
                result.stats.examined,
                result.stats.searched,
                search_secs,
                result.stats.matched,
                result.len()
            );
        }
        Command::Update { include, words } => {
            let added = service.update_words(&UpdateWordsRequest { words, include })?;
            eprintln!("Added {added} words.");
        }
        Command::List { include } => {
            for word in service.get_list(include)? {
                println!("{word}");
            }
        }
        Command::Merge => {
            let response = service.merge_words()?;
            eprintln!("Merged {} words.", response.added_count);
        }
        Command::CleanMerge => {
            println!("{}", service.clean_merge()?);
        }
        Command::Lookup { word, exact } => {
            let items = service.lookup_word(&word, exact);
            for item in &items {
                println!("{}:{}\t{}", item.source, item.line, item.word);
            }
            eprintln!("{} matches.", items.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from(["wordgrid", "--data-dir", "/tmp/x", "search", "-g", "CAT/DOG", "-n", "-1"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
        match cli.command {
            Command::Search { grid, max_words, json, .. } => {
                assert_eq!(grid.as_deref(), Some("CAT/DOG"));
                assert_eq!(max_words, -1);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_a_grid() {
        assert!(Cli::try_parse_from(["wordgrid", "search"]).is_err());
    }

    #[test]
    fn test_parse_clean_merge_and_lookup() {
        let cli = Cli::try_parse_from(["wordgrid", "clean-merge"]).unwrap();
        assert!(matches!(cli.command, Command::CleanMerge));

        let cli = Cli::try_parse_from(["wordgrid", "lookup", "pear", "--exact"]).unwrap();
        assert!(matches!(cli.command, Command::Lookup { ref word, exact: true } if word == "pear"));
    }
}
