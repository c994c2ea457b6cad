//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of puzzles on *your* machine.
//! - Runs each puzzle several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the answers:              `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Use the same machine and `--release` for more comparable numbers.
//! - Puzzles live in `get_cases()` below.
//! - One warm-up run per puzzle is done (not included in timing).

use clap::Parser;
use instant::Instant;
use std::hint::black_box;
use cryptarith::solver::{self, SolveOptions};

/// Simple local benchmark runner: time several puzzles, report the median of each.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per puzzle (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print each puzzle's answer and decoded equation
    #[arg(short = 'p', long = "print")]
    print: bool,
}

/// Edit/add new puzzles here. The summary uses the equation text as the name.
fn get_cases() -> Vec<&'static str> {
    vec![
        "A+B=C",
        "TWO+TWO=FOUR",
        "SEND+MORE=MONEY",
        "CROSS+ROADS=DANGER",
        // ten letters: close to the worst case
        "ABCD-EFGH=IJ",
        // exhausts the whole tree without a hit
        "ABCDE-FGHIJ=A",
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

const MAX_EQUATION_LEN: usize = 24;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the benchmark summary: (equation, median seconds, full assignments checked, answer).
    type SummaryRow = (String, f64, u64, String);

    let cli = Cli::parse();
    let options = SolveOptions::default();

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, &equation) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, equation);

        // One *warm-up* execution per puzzle. We intentionally ignore its timing.
        if let Err(e) = solver::solve_equation(equation, &options) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_result = None;

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_solve = Instant::now();
            let result = solver::solve_equation(black_box(equation), &options)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} full assignments checked)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                result.stats.leaves
            );
            last_result = Some(black_box(result));
        }

        let Some(result) = last_result else {
            continue;
        };
        let med = median(times);

        let answer = match &result.solution {
            Some(solution) => {
                if cli.print {
                    println!("{equation}: {}", solution.decoded_equation());
                }
                solver::solution_to_string(solution)?
            }
            None => solver::NO_SOLUTION.to_string(),
        };

        eprintln!("  → median {:.3}s over {} run(s); answer {}", med, cli.num_repeats, answer);
        summary.push((equation.to_string(), med, result.stats.leaves, answer));
    }

    // Compact summary at the end for a quick scan across all puzzles.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_EQUATION_LEN$} | {:>10} | {:>10} | {:>12}",
        "equation", "median (s)", "leaves", "answer"
    );
    eprintln!(
        "{:-<MAX_EQUATION_LEN$}-+-{:-<10}-+-{:-<10}-+-{:-<12}",
        "", "", "", ""
    );
    for (equation, med, leaves, answer) in &summary {
        eprintln!("{equation:<MAX_EQUATION_LEN$} | {med:>10.3} | {leaves:>10} | {answer:>12}");
    }

    Ok(())
}
