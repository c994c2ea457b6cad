use std::ops::RangeInclusive;

// Character-set and digit constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Number of distinct decimal digits; also the most distinct letters a puzzle can use.
pub const NUM_DIGITS: usize = 10;

pub(crate) trait PuzzleChar {
    fn is_puzzle_letter(&self) -> bool;
    fn is_separator(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_puzzle_letter(&self) -> bool {
        UPPERCASE_ALPHABET.contains(self)
    }
    fn is_separator(&self) -> bool {
        self.is_whitespace()
    }
}
