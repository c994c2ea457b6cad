use crate::operator::Operator::{Add, Sub};
use std::fmt;

/// Operator symbols in the order the parser looks for them on the left side.
pub(crate) static OPERATORS: [Operator; 2] = [Add, Sub];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Add => '+',
            Sub => '-',
        }
    }

    /// Apply the operator to two values, `None` on overflow or a negative difference.
    #[must_use]
    pub fn apply(self, lhs: u128, rhs: u128) -> Option<u128> {
        match self {
            Add => lhs.checked_add(rhs),
            Sub => lhs.checked_sub(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(Add.to_string(), "+");
        assert_eq!(Sub.to_string(), "-");
    }

    #[test]
    fn test_operators_in_priority_order() {
        let symbols: Vec<char> = OPERATORS.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!['+', '-']);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Add.apply(9567, 1085), Some(10652));
        assert_eq!(Sub.apply(2034, 1956), Some(78));
        assert_eq!(Sub.apply(1, 2), None);
        assert_eq!(Add.apply(u128::MAX, 1), None);
    }
}
