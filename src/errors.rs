//! Error types for equation parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E007) for documentation lookup:
//!
//! - E001: `EmptyEquation` (Nothing left after stripping whitespace)
//! - E002: `MissingEquals` (No '=' in the equation)
//! - E003: `MultipleEquals` (More than one '=' in the equation)
//! - E004: `MissingOperator` (No '+' or '-' on the left side)
//! - E005: `WrongOperandCount` (Left side does not split into exactly two operands)
//! - E006: `EmptyWord` (An operand or the result is empty)
//! - E007: `InvalidCharacter` (A word contains something other than A-Z)
//!
//! # Examples
//!
//! ```
//! use cryptarith::errors::ParseError;
//! use cryptarith::parser::Puzzle;
//!
//! let err: Box<ParseError> = "SEND+MORE".parse::<Puzzle>().unwrap_err();
//! assert_eq!(err.code(), "E002");
//! println!("Error: {}", err);
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::fmt;

/// Which of the three words an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    FirstOperand,
    SecondOperand,
    Result,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WordRole::FirstOperand => "first operand",
            WordRole::SecondOperand => "second operand",
            WordRole::Result => "result",
        };
        write!(f, "{s}")
    }
}

/// Custom error type for parsing operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty equation")]
    EmptyEquation,

    #[error("Equation \"{equation}\" has no '='")]
    MissingEquals { equation: String },

    #[error("Equation \"{equation}\" has {count} '=' signs (expected exactly one)")]
    MultipleEquals { equation: String, count: usize },

    #[error("Left side \"{left}\" has no '+' or '-' operator")]
    MissingOperator { left: String },

    #[error("Left side \"{left}\" splits into {count} operands on '{operator}' (expected 2)")]
    WrongOperandCount { left: String, operator: char, count: usize },

    #[error("The {role} is empty")]
    EmptyWord { role: WordRole },

    #[error("Invalid character '{invalid_char}' in {role} \"{word}\" (only A-Z allowed)")]
    InvalidCharacter { role: WordRole, word: String, invalid_char: char },
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyEquation => "E001",
            ParseError::MissingEquals { .. } => "E002",
            ParseError::MultipleEquals { .. } => "E003",
            ParseError::MissingOperator { .. } => "E004",
            ParseError::WrongOperandCount { .. } => "E005",
            ParseError::EmptyWord { .. } => "E006",
            ParseError::InvalidCharacter { .. } => "E007",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::EmptyEquation => "Empty equation",
            ParseError::MissingEquals { .. } => "No '=' in the equation",
            ParseError::MultipleEquals { .. } => "More than one '=' in the equation",
            ParseError::MissingOperator { .. } => "No '+' or '-' on the left side",
            ParseError::WrongOperandCount { .. } => "Left side does not have exactly two operands",
            ParseError::EmptyWord { .. } => "An operand or the result is empty",
            ParseError::InvalidCharacter { .. } => "A word contains something other than A-Z",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::EmptyEquation => "The input was empty, or contained only whitespace.",
            ParseError::MissingEquals { .. } => "An equation has the shape `WORD op WORD = WORD`; the '=' separating the operands from the result is missing.",
            ParseError::MultipleEquals { .. } => "Only a single result word is supported, so the equation must contain exactly one '='.",
            ParseError::MissingOperator { .. } => "The left side of the '=' must join two operands with '+' or '-'. When both appear, '+' is used.",
            ParseError::WrongOperandCount { .. } => "Splitting the left side on the operator must produce exactly two operands. Multi-operand sums are not supported.",
            ParseError::EmptyWord { .. } => "Each of the two operands and the result must contain at least one letter.",
            ParseError::InvalidCharacter { .. } => "Words may only use the uppercase letters A-Z. Digits, lowercase letters and punctuation are rejected.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyEquation
            | ParseError::MissingEquals { .. } => Some("Example: SEND+MORE=MONEY"),
            ParseError::MultipleEquals { .. } => Some("Write a single equation such as AB+CD=EF"),
            ParseError::MissingOperator { .. } => Some("Join the operands with '+' or '-', e.g. ABCD-EFGH=IJ"),
            ParseError::WrongOperandCount { .. } => Some("Use exactly two operands, e.g. TWO+TWO=FOUR"),
            ParseError::EmptyWord { .. } => Some("Every word needs at least one letter, e.g. A+B=C"),
            ParseError::InvalidCharacter { .. } => Some("Use uppercase letters only (SEND, not send or S3ND)"),
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

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::EmptyEquation,
            ParseError::MissingEquals { equation: "AB".to_string() },
            ParseError::MultipleEquals { equation: "A=B=C".to_string(), count: 2 },
            ParseError::MissingOperator { left: "AB".to_string() },
            ParseError::WrongOperandCount { left: "A+B+C".to_string(), operator: '+', count: 3 },
            ParseError::EmptyWord { role: WordRole::SecondOperand },
            ParseError::InvalidCharacter { role: WordRole::Result, word: "C1".to_string(), invalid_char: '1' },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::MissingEquals { equation: "SEND+MORE".to_string() };
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
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('E'), "Error code '{code}' should start with 'E'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
        assert_eq!(codes.len(), 7);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (E0XX)");
            assert!(code.starts_with("E0"));
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {err:?} should be substantial");
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = ParseError::InvalidCharacter {
            role: WordRole::FirstOperand,
            word: "SeND".to_string(),
            invalid_char: 'e',
        };
        let detailed = err.display_detailed();

        assert!(detailed.contains(err.code()));
        assert!(detailed.contains(&err.to_string()));
        assert!(detailed.contains("first operand"));
        assert!(detailed.contains("'e'"));
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }

    #[test]
    fn test_every_variant_has_help() {
        for err in all_variants() {
            let help = err.help().unwrap_or_else(|| panic!("{err:?} should carry help text"));
            assert_eq!(err.display_detailed(), format!("{err} ({})\n{help}", err.code()));
        }
    }
}
