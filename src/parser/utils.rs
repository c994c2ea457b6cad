use crate::puzzle_char::PuzzleChar;

/// Drop every whitespace character, including interior ones ("SEND + MORE" -> "SEND+MORE").
/// Zero-width characters such as U+200B and U+FEFF are not whitespace and are kept.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_separator()).collect()
}
