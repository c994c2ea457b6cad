//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use cryptarith::errors::{ParseError, WordRole};
use cryptarith::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            writeln!($out, "### {}: {}\n", error.code(), error.description())?;
            writeln!($out, "**Details:** {}\n", error.details())?;

            if let Some(help_text) = error.help() {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```\n{help_text}\n```\n")?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```\n{error}\n```\n")?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```\n{}\n```\n", error.display_detailed())?;

            writeln!($out, "---\n")?;
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::EmptyEquation,
        ParseError::MissingEquals { equation: "SEND+MORE".to_string() },
        ParseError::MultipleEquals { equation: "A+B=C=D".to_string(), count: 2 },
        ParseError::MissingOperator { left: "SENDMORE".to_string() },
        ParseError::WrongOperandCount { left: "A+B+C".to_string(), operator: '+', count: 3 },
        ParseError::EmptyWord { role: WordRole::SecondOperand },
        ParseError::InvalidCharacter {
            role: WordRole::FirstOperand,
            word: "S3ND".to_string(),
            invalid_char: '3',
        },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::MissingEquals { equation: "SEND+MORE".to_string() })),
        SolverError::IncompleteAssignment { letter: 'Y' },
    ]
}

fn render_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Solver Errors (S001–S002)](#solver-errors)")?;
    writeln!(out, "- [Parse Errors (E001–E007)](#parse-errors)")?;
    writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n")?;

    writeln!(out, "## Solver Errors\n")?;
    writeln!(out, "Top-level errors from the solver. These wrap lower-level parse errors or indicate solver-specific issues.")?;
    writeln!(out, "An equation that parses but has no solution is not an error; the CLI prints `NO SOLUTION`.\n")?;
    generate_error_docs!(out, all_solver_error_variants());

    writeln!(out, "## Parse Errors\n")?;
    writeln!(out, "Errors that occur when parsing an equation string.\n")?;
    generate_error_docs!(out, all_parse_error_variants());

    writeln!(out, "\n## How to Use Error Codes\n")?;
    writeln!(out, "Run the CLI with `--explain` to see an error like:\n")?;
    writeln!(out, "```")?;
    writeln!(out, "{}", ParseError::MissingEquals { equation: "SEND+MORE".to_string() }.display_detailed())?;
    writeln!(out, "```\n")?;
    writeln!(out, "1. Note the error code (e.g., `E002`)")?;
    writeln!(out, "2. Look it up in this document for detailed explanation")?;
    writeln!(out, "3. Follow the suggested resolution steps\n")?;

    Ok(out)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", render_docs()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_cover_every_code() {
        let docs = render_docs().unwrap();
        for code in all_parse_error_variants().iter().map(ParseError::code)
            .chain(all_solver_error_variants().iter().map(SolverError::code))
        {
            assert!(docs.contains(&format!("### {code}:")), "missing section for {code}");
        }
    }

    #[test]
    fn test_variant_lists_have_unique_codes() {
        let mut codes = std::collections::HashSet::new();
        for code in all_parse_error_variants().iter().map(ParseError::code) {
            assert!(codes.insert(code));
        }
        for code in all_solver_error_variants().iter().map(SolverError::code) {
            assert!(codes.insert(code));
        }
        assert_eq!(codes.len(), 9);
    }
}
