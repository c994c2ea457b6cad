use std::fmt;
use std::fmt::{Display, Formatter};

use crate::puzzle_char::{ALPHABET_SIZE, NUM_DIGITS};

/// Set of digits 0-9 already taken by some letter, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsedDigits(u16);

impl UsedDigits {
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        usize::from(digit) < NUM_DIGITS && self.0 & (1 << digit) != 0
    }

    fn insert(&mut self, digit: u8) {
        self.0 |= 1 << digit;
    }

    fn remove(&mut self, digit: u8) {
        self.0 &= !(1 << digit);
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// `Assignment` maps a puzzle letter to the digit it stands for.
///
/// Uses array-based storage instead of `HashMap` since letters are limited to 'A'-'Z'.
/// The companion [`UsedDigits`] set keeps the mapping injective: a digit can only be
/// assigned while no other letter holds it, so `len() == used_digits().len()` always.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// index 0-25 for 'A'-'Z'
    slots: [Option<u8>; ALPHABET_SIZE],
    used: UsedDigits,
}

/// Convert a letter to an array index
/// 'A' -> 0, 'B' -> 1, ..., 'Z' -> 25
///
/// # Panics
/// Panics if `c` is not in 'A'..='Z'. The parser rejects every other character
/// before a `Puzzle` exists, so anything else here is a programming error.
#[inline]
fn char_to_index(c: char) -> usize {
    match c {
        'A'..='Z' => (c as u8 - b'A') as usize,
        _ => panic!("Invalid letter: '{c}' (parser should have validated this)"),
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter()
            .map(|(k, v)| format!("{k}→{v}"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl Assignment {
    /// Map `letter` to `digit`.
    ///
    /// Returns `false` (and changes nothing) if the letter already has a digit,
    /// the digit is taken by another letter, or the digit is not 0-9.
    pub fn assign(&mut self, letter: char, digit: u8) -> bool {
        let i = char_to_index(letter);
        if usize::from(digit) >= NUM_DIGITS || self.slots[i].is_some() || self.used.contains(digit) {
            return false;
        }
        self.slots[i] = Some(digit);
        self.used.insert(digit);

        debug_assert_eq!(self.len(), self.used.len());
        true
    }

    /// Remove the digit for `letter`, releasing it for other letters.
    pub fn unassign(&mut self, letter: char) -> Option<u8> {
        let i = char_to_index(letter);
        let digit = self.slots[i].take()?;
        self.used.remove(digit);

        debug_assert_eq!(self.len(), self.used.len());
        Some(digit)
    }

    /// Retrieve the digit for a letter
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u8> {
        self.slots[char_to_index(letter)]
    }

    #[must_use]
    pub fn is_digit_used(&self, digit: u8) -> bool {
        self.used.contains(digit)
    }

    #[must_use]
    pub fn used_digits(&self) -> UsedDigits {
        self.used
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Iterate over the assigned letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.slots.iter().zip('A'..='Z').filter_map(|(slot, c)| slot.map(|d| (c, d)))
    }

    #[must_use]
    pub fn contains_all_letters(&self, letters: &[char]) -> bool {
        letters.iter().all(|&c| self.get(c).is_some())
    }

    /// Decode `word` as a base-10 number.
    /// `None` if a letter is unassigned or the value does not fit in a `u128`.
    #[must_use]
    pub fn decode(&self, word: &str) -> Option<u128> {
        word.chars().try_fold(0u128, |acc, c| {
            acc.checked_mul(10)?.checked_add(u128::from(self.get(c)?))
        })
    }
}
