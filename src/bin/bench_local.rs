//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of dictionary scans over a few grids on *your* machine.
//! - Loads the word list once, then scans each grid several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Another dictionary:             `cargo run --bin bench_local --release -- -w resources/definitions.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few matches:            `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - One warm-up scan per grid is done and not timed.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::grid::Grid;
use wordgrid::scanner;
use wordgrid::word_list::WordList;

/// Load a word list once, then time scans over several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/definitions.txt")
    )]
    word_list: String,

    /// Number of repeats per grid (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many matches per grid (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Words requested per scan.
const NUM_RESULTS: usize = 100;

/// Edit/add grids here, as grid literals.
fn get_cases() -> Vec<&'static str> {
    vec![
        "P E A R / K I W I / X X X X",
        "C A T S / O D O G / R E E L / N A P E",
        "S T A R E / L I N E S / A T E S T / T O N E S / E R S E T",
        "[Qu] I T E / A C K S / E R S T / D O N E",
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let wl = WordList::load_from_path(&cli.word_list)?;
    eprintln!("Loaded {} words in {:.3}s", wl.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(String, f64, usize)> = Vec::new();

    for (idx, literal) in get_cases().into_iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, literal);
        let grid: Grid = literal.parse().map_err(|e: Box<wordgrid::errors::ParseError>| *e)?;

        let _warmup = scanner::scan(&wl.words, &grid, NUM_RESULTS);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = scanner::ScanResult::default();
        for rep in 0..cli.num_repeats {
            let t_scan = Instant::now();
            let result = scanner::scan(&wl.words, black_box(&grid), NUM_RESULTS);
            let scan_secs = t_scan.elapsed().as_secs_f64();
            times.push(scan_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} searched, {} found)",
                rep + 1,
                cli.num_repeats,
                scan_secs,
                result.stats.searched,
                result.stats.matched
            );
            last = result;
        }

        let med = median(times);
        for word_match in last.matches.iter().take(cli.print_limit) {
            println!("{word_match}");
        }
        summary.push((literal.to_string(), med, last.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<60} | {:>10} | {:>7}", "grid", "median (s)", "# words");
    eprintln!("{:-<60}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (grid, med, found) in &summary {
        eprintln!("{grid:<60} | {med:>10.4} | {found:>7}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_parse() {
        for literal in get_cases() {
            assert!(literal.parse::<Grid>().is_ok(), "bad case {literal}");
        }
    }
}
