use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;
use instant::Instant;
use std::time::Duration;

use cryptarith::solver::{self, SolveOptions, SolveStatus, NO_SOLUTION};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Cryptarithmetic puzzle solver
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// The equation to solve (e.g., "SEND+MORE=MONEY"); read from stdin if omitted
    equation: Option<String>,

    /// Give up after this many seconds (no limit by default)
    #[arg(short, long)]
    timeout: Option<f64>,

    /// Explain parse failures and print the decoded equation on stderr
    #[arg(short, long)]
    explain: bool,
}

/// Entry point of the cryptarith CLI.
///
/// An unparseable or unsolvable equation is a normal outcome (`NO SOLUTION`,
/// exit code 0). Only I/O and argument errors exit with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("CRYPTARITH_DEBUG").is_ok();
    cryptarith::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Take the equation from the argument, or the first line of stdin.
/// 3. Solve it and print exactly one line on stdout.
/// 4. Print diagnostics (timeouts, explanations) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let equation = match cli.equation {
        Some(equation) => equation,
        None => read_equation(io::stdin().lock())?,
    };

    let options = SolveOptions {
        time_budget: cli.timeout.map(Duration::try_from_secs_f64).transpose()?,
    };

    let t_solve = Instant::now();
    let line = match solver::solve_equation(&equation, &options) {
        Ok(result) => {
            if let SolveStatus::TimedOut { elapsed } = result.status {
                eprintln!("⚠️  Timed out after {:.1}s; no solution was found in time", elapsed.as_secs_f64());
            }
            match &result.solution {
                Some(solution) => {
                    if cli.explain {
                        eprintln!("{} ({})", solution.decoded_equation(), solution.mapping());
                    }
                    solver::solution_to_string(solution)?
                }
                None => NO_SOLUTION.to_string(),
            }
        }
        Err(e) => {
            if cli.explain {
                eprintln!("Error: {}", e.display_detailed());
            }
            NO_SOLUTION.to_string()
        }
    };
    log::debug!("solved in {:.3}s", t_solve.elapsed().as_secs_f64());

    println!("{line}");

    Ok(())
}

/// Read the first line of `reader`, without its line terminator.
/// An empty input yields an empty equation. Bytes that are not UTF-8 become
/// U+FFFD, which the parser then rejects like any other stray character.
fn read_equation(mut reader: impl BufRead) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
