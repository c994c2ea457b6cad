//! Parsing a raw equation string into a [`Puzzle`].
//!
//! An equation has the shape `WORD op WORD = WORD`, where `op` is `+` or `-`
//! and every word is made of the uppercase letters `A`-`Z`. Whitespace anywhere
//! in the input is ignored.
//!
//! Validation is fail-fast and runs in this order:
//! 1. exactly one `=` (`MissingEquals` / `MultipleEquals`),
//! 2. an operator on the left side, `+` checked before `-` (`MissingOperator`),
//!    splitting into exactly two operands (`WrongOperandCount`),
//! 3. each word non-empty (`EmptyWord`) and letters only (`InvalidCharacter`).

use crate::errors::{ParseError, WordRole};
use crate::operator::{Operator, OPERATORS};
use crate::parser::utils::strip_whitespace;
use crate::puzzle_char::PuzzleChar;
use nom::{
    bytes::complete::take_while1,
    combinator::all_consuming,
    Finish,
    IResult,
    Parser,
};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A parsed two-operand equation, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    operand1: String,
    operand2: String,
    result: String,
    operator: Operator,
    /// distinct letters of all three words, sorted; this is the search order
    letters: Vec<char>,
    /// first letter of each word; none of these may be zero
    leading_letters: BTreeSet<char>,
}

impl Puzzle {
    /// Build a puzzle from its three words, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWord` or `InvalidCharacter` for the first word that is not
    /// a non-empty run of `A`-`Z`.
    pub fn new(operand1: &str, operator: Operator, operand2: &str, result: &str) -> Result<Self, Box<ParseError>> {
        let operand1 = word(operand1, WordRole::FirstOperand)?;
        let operand2 = word(operand2, WordRole::SecondOperand)?;
        let result = word(result, WordRole::Result)?;

        let letters = operand1
            .chars()
            .chain(operand2.chars())
            .chain(result.chars())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let leading_letters = [&operand1, &operand2, &result]
            .iter()
            .filter_map(|w| w.chars().next())
            .collect();

        Ok(Puzzle { operand1, operand2, result, operator, letters, leading_letters })
    }

    #[must_use]
    pub fn operand1(&self) -> &str {
        &self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> &str {
        &self.operand2
    }

    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Distinct letters in alphabetical order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn leading_letters(&self) -> &BTreeSet<char> {
        &self.leading_letters
    }

    #[must_use]
    pub fn is_leading(&self, letter: char) -> bool {
        self.leading_letters.contains(&letter)
    }

    /// `[operand1, operand2, result]`
    #[must_use]
    pub fn words(&self) -> [&str; 3] {
        [&self.operand1, &self.operand2, &self.result]
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.operand1, self.operator, self.operand2, self.result)
    }
}

impl FromStr for Puzzle {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let equation = strip_whitespace(s);
        if equation.is_empty() {
            return Err(Box::new(ParseError::EmptyEquation));
        }

        let Some((left, right)) = equation.split_once('=') else {
            return Err(Box::new(ParseError::MissingEquals { equation }));
        };
        if right.contains('=') {
            let count = equation.matches('=').count();
            return Err(Box::new(ParseError::MultipleEquals { equation, count }));
        }

        // '+' wins when both symbols appear
        let Some(operator) = OPERATORS.iter().copied().find(|op| left.contains(op.symbol())) else {
            return Err(Box::new(ParseError::MissingOperator { left: left.to_string() }));
        };

        let operands: Vec<&str> = left.split(operator.symbol()).collect();
        let [operand1, operand2] = operands.as_slice() else {
            return Err(Box::new(ParseError::WrongOperandCount {
                left: left.to_string(),
                operator: operator.symbol(),
                count: operands.len(),
            }));
        };

        Puzzle::new(operand1, operator, operand2, right)
    }
}

// === Token parsers ===

fn letters(input: &'_ str) -> IResult<&'_ str, &'_ str> {
    take_while1(|c: char| c.is_puzzle_letter()).parse(input)
}

/// Validate one word: non-empty and made only of `A`-`Z`.
///
/// nom stops at the first character that is not a letter, so the failing
/// input starts with the character to report. An empty remainder means the
/// word itself was empty.
fn word(raw: &str, role: WordRole) -> Result<String, Box<ParseError>> {
    let (_, w) = all_consuming(letters).parse(raw).finish().map_err(|e| {
        Box::new(match e.input.chars().next() {
            Some(invalid_char) => ParseError::InvalidCharacter { role, word: raw.to_string(), invalid_char },
            None => ParseError::EmptyWord { role },
        })
    })?;
    Ok(w.to_string())
}
