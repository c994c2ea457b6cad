//! The backtracking solver for two-operand cryptarithmetic puzzles.
//!
//! Letters are assigned in alphabetical order, digits are tried in ascending
//! order, leading letters never take 0, and the equation is only checked once
//! every letter has a digit. The first assignment that satisfies the equation
//! is returned, so the answer for a puzzle with several solutions is fixed by
//! that search order.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `ParseFailure` (Equation parsing failed (wraps [`ParseError`]))
//! - S002: `IncompleteAssignment` (Solution is missing a digit for one of its letters)
//!
//! A well-formed puzzle without a solution is not an error: it comes back as
//! [`SolveStatus::Exhausted`] (or [`SolveStatus::TooManyLetters`]).
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! assert_eq!(cryptarith::solve("SEND+MORE=MONEY"), "75160892");
//! assert_eq!(cryptarith::solve("A+A=A"), "NO SOLUTION");
//! assert_eq!(cryptarith::solve("not an equation"), "NO SOLUTION");
//! ```
//!
//! ## Telling Parse Failures Apart
//!
//! ```
//! use cryptarith::solver::{self, SolveOptions, SolveStatus};
//!
//! let result = solver::solve_equation("TWO+TWO=FOUR", &SolveOptions::default())?;
//! assert_eq!(result.status, SolveStatus::Solved);
//! let solution = result.solution.expect("solved");
//! println!("{}", solution.decoded_equation());
//!
//! match solver::solve_equation("TWO+TWO", &SolveOptions::default()) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("{}", e.display_detailed()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::assignment::Assignment;
use crate::errors::ParseError;
use crate::operator::Operator;
use crate::parser::Puzzle;
use crate::puzzle_char::NUM_DIGITS;
use instant::Instant;
use log::{debug, info, warn};
use std::time::Duration;

/// Output for any equation that cannot be parsed or has no solution
pub const NO_SOLUTION: &str = "NO SOLUTION";

/// Most distinct letters a puzzle can have and still be solvable
pub const MAX_LETTERS: usize = NUM_DIGITS;

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// A satisfying assignment was found.
    Solved,

    /// Every assignment was tried and none satisfies the equation.
    Exhausted,

    /// The puzzle has more distinct letters than there are digits, so no search was run.
    TooManyLetters { count: usize },

    /// Solver stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of letter-to-digit assignments tried
    pub nodes: u64,
    /// Number of complete assignments checked against the equation
    pub leaves: u64,
}

/// Knobs for a single solve call.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Give up after this long; `None` searches to completion.
    pub time_budget: Option<Duration>,
}

/// An accepted assignment together with the puzzle it solves.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    puzzle: Puzzle,
    assignment: Assignment,
}

impl Solution {
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    #[must_use]
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    /// Letter/digit pairs in letter order, e.g. `D=7 E=5 M=1`.
    #[must_use]
    pub fn mapping(&self) -> String {
        self.puzzle
            .letters()
            .iter()
            .map(|&c| match self.assignment.get(c) {
                Some(d) => format!("{c}={d}"),
                None => format!("{c}=?"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The equation with every letter replaced by its digit, e.g. `9567 + 1085 = 10652`.
    #[must_use]
    pub fn decoded_equation(&self) -> String {
        let [operand1, operand2, result] = self.puzzle.words().map(|w| {
            w.chars()
                .map(|c| self.assignment.get(c).map_or('?', |d| char::from(b'0' + d)))
                .collect::<String>()
        });
        format!("{operand1} {} {operand2} = {result}", self.puzzle.operator())
    }
}

/// Successful solver run (even if no solution exists).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The accepted solution, if any.
    pub solution: Option<Solution>,
    /// Why the search stopped.
    pub status: SolveStatus,
    /// Search counters.
    pub stats: SearchStats,
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure during parsing of the equation string into a `Puzzle`.
    ///
    /// These originate from the parser (`ParseError`), which we box to keep the
    /// error type size stable.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// A solution was rendered while one of its letters had no digit.
    #[error("letter '{letter}' has no digit in the solution")]
    IncompleteAssignment { letter: char },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::IncompleteAssignment { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Equation parsing failed",
            SolverError::IncompleteAssignment { .. } => "Solution is missing a digit for one of its letters",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "The input equation could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::IncompleteAssignment { .. } => "An accepted assignment always gives every letter a digit, so this indicates an internal solver error.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::ParseFailure(_) => None, // ParseError has its own help
            SolverError::IncompleteAssignment { .. } => Some("This is an internal error. Please report the equation that triggered it."),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::IncompleteAssignment { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Render a solution as one digit per letter, in the puzzle's letter order.
///
/// # Errors
///
/// Returns `SolverError::IncompleteAssignment` if some letter has no digit.
pub fn solution_to_string(solution: &Solution) -> Result<String, SolverError> {
    solution
        .puzzle
        .letters()
        .iter()
        .map(|&letter| {
            solution
                .assignment
                .get(letter)
                .map(|d| char::from(b'0' + d))
                .ok_or(SolverError::IncompleteAssignment { letter })
        })
        .collect()
}

/// Simple helper to enforce an optional wall-clock time limit.
struct TimeBudget {
    start: Instant,          // when the budget began
    limit: Option<Duration>, // maximum allowed elapsed time, if any
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// How long this budget has been running.
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true if a limit was set and has fully elapsed.
    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// How a subtree of the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The assignment currently held satisfies the equation.
    Accepted,
    /// No assignment below this point works; the caller should try its next digit.
    Exhausted,
    TimedOut,
}

/// The equation rewritten as `addend1 + addend2 = total`, words reversed so
/// index 0 is the least significant column. Subtraction `a - b = c` becomes
/// `c + b = a`.
struct ColumnSum {
    addend1: Vec<char>,
    addend2: Vec<char>,
    total: Vec<char>,
}

impl ColumnSum {
    fn new(puzzle: &Puzzle) -> Self {
        let [operand1, operand2, result] = puzzle.words();
        let (addend1, addend2, total) = match puzzle.operator() {
            Operator::Add => (operand1, operand2, result),
            Operator::Sub => (result, operand2, operand1),
        };
        let rev = |w: &str| w.chars().rev().collect::<Vec<_>>();
        ColumnSum { addend1: rev(addend1), addend2: rev(addend2), total: rev(total) }
    }

    /// Check the sum column by column with carries, so words of any length work.
    /// Missing columns count as zero; an unassigned letter fails the check.
    fn holds(&self, assignment: &Assignment) -> bool {
        let digit_at = |word: &[char], i: usize| match word.get(i) {
            Some(&c) => assignment.get(c),
            None => Some(0),
        };

        let width = self.addend1.len().max(self.addend2.len()).max(self.total.len());
        let mut carry = 0;
        for i in 0..width {
            let (Some(a), Some(b), Some(t)) = (
                digit_at(&self.addend1, i),
                digit_at(&self.addend2, i),
                digit_at(&self.total, i),
            ) else {
                return false;
            };
            let column = a + b + carry;
            if column % 10 != t {
                return false;
            }
            carry = column / 10;
        }
        carry == 0
    }
}

/// Decode the three words and apply the operator.
/// `None` when a word is too long for a `u128` or has an unassigned letter.
fn decoded_check(puzzle: &Puzzle, assignment: &Assignment) -> Option<bool> {
    let [operand1, operand2, result] = puzzle.words().map(|w| assignment.decode(w));
    Some(puzzle.operator().apply(operand1?, operand2?) == Some(result?))
}

/// Context for a `backtrack` call
struct SearchCtx<'a> {
    puzzle: &'a Puzzle,
    column_sum: ColumnSum,
    budget: TimeBudget,
}

/// Depth-first search over digit assignments.
///
/// At `depth`, the letter `letters[depth]` is tried against every free digit in
/// ascending order (skipping 0 for leading letters). Once all letters are
/// assigned the equation is checked. On `Step::Accepted` the assignment is left
/// in place; on `Step::Exhausted` it is restored to what the caller passed in.
fn backtrack(
    assignment: &mut Assignment,
    depth: usize,
    ctx: &SearchCtx,
    stats: &mut SearchStats,
) -> Step {
    let letters = ctx.puzzle.letters();

    // Invariant: letters[..depth] are assigned, nothing else is
    debug_assert_eq!(assignment.len(), depth);
    debug_assert!(assignment.contains_all_letters(&letters[..depth]));

    if ctx.budget.expired() {
        return Step::TimedOut;
    }

    let Some(&letter) = letters.get(depth) else {
        // Base case: every letter has a digit
        stats.leaves += 1;
        if !ctx.column_sum.holds(assignment) {
            return Step::Exhausted;
        }
        debug_assert_ne!(decoded_check(ctx.puzzle, assignment), Some(false), "column check disagrees with {assignment}");
        return Step::Accepted;
    };

    for digit in 0..NUM_DIGITS as u8 {
        if assignment.is_digit_used(digit) {
            continue;
        }
        if digit == 0 && ctx.puzzle.is_leading(letter) {
            continue;
        }

        let assigned = assignment.assign(letter, digit);
        debug_assert!(assigned, "letter '{letter}' and digit {digit} must both be free");
        stats.nodes += 1;

        match backtrack(assignment, depth + 1, ctx, stats) {
            Step::Exhausted => {}
            done => return done,
        }

        // Backtrack
        assignment.unassign(letter);
    }

    Step::Exhausted
}

/// Search for the first satisfying assignment of an already-parsed puzzle.
///
/// Never fails: an unsolvable puzzle is reported through [`SolveStatus`].
#[must_use]
pub fn solve_puzzle_with(puzzle: &Puzzle, options: &SolveOptions) -> SolveResult {
    let letter_count = puzzle.letters().len();
    debug!("{puzzle} ({letter_count} letters, leading {:?})", puzzle.leading_letters());

    // Pigeonhole: an injective map into ten digits needs at most ten letters
    if letter_count > MAX_LETTERS {
        info!("{puzzle}: {letter_count} distinct letters, no solution possible");
        return SolveResult {
            solution: None,
            status: SolveStatus::TooManyLetters { count: letter_count },
            stats: SearchStats::default(),
        };
    }

    let ctx = SearchCtx {
        puzzle,
        column_sum: ColumnSum::new(puzzle),
        budget: TimeBudget::new(options.time_budget),
    };
    let mut assignment = Assignment::default();
    let mut stats = SearchStats::default();

    let step = backtrack(&mut assignment, 0, &ctx, &mut stats);
    let elapsed = ctx.budget.elapsed();

    debug!(
        "search tried {} assignments and checked {} full assignments in {:.3}s",
        stats.nodes,
        stats.leaves,
        elapsed.as_secs_f64()
    );

    match step {
        Step::Accepted => {
            // Postcondition: total, injective, no leading zeros
            debug_assert_eq!(assignment.len(), letter_count);
            debug_assert_eq!(assignment.used_digits().len(), letter_count);
            debug_assert!(puzzle.leading_letters().iter().all(|&c| assignment.get(c) != Some(0)));

            let solution = Solution { puzzle: puzzle.clone(), assignment };
            info!("{puzzle}: solved as {}", solution.decoded_equation());
            SolveResult { solution: Some(solution), status: SolveStatus::Solved, stats }
        }
        Step::Exhausted => {
            info!("{puzzle}: no solution");
            SolveResult { solution: None, status: SolveStatus::Exhausted, stats }
        }
        Step::TimedOut => {
            warn!("{puzzle}: search timed out after {:.3}s", elapsed.as_secs_f64());
            SolveResult { solution: None, status: SolveStatus::TimedOut { elapsed }, stats }
        }
    }
}

/// Search for the first satisfying assignment of `puzzle`, with no time limit.
///
/// Returns `None` if no assignment exists.
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle) -> Option<Assignment> {
    solve_puzzle_with(puzzle, &SolveOptions::default())
        .solution
        .map(Solution::into_assignment)
}

/// Parse an equation string and solve it.
///
/// # Errors
///
/// Returns `SolverError::ParseFailure` if the equation is malformed. A
/// well-formed equation without a solution is `Ok` with no solution.
pub fn solve_equation(input: &str, options: &SolveOptions) -> Result<SolveResult, SolverError> {
    let puzzle = input.parse::<Puzzle>()?;
    Ok(solve_puzzle_with(&puzzle, options))
}

/// Solve an equation string and render the answer.
///
/// Returns one digit per distinct letter (letters in alphabetical order), or
/// [`NO_SOLUTION`] if the equation is malformed or has no solution.
#[must_use]
pub fn solve(input: &str) -> String {
    let result = match solve_equation(input, &SolveOptions::default()) {
        Ok(result) => result,
        Err(e) => {
            debug!("{}", e.display_detailed());
            return NO_SOLUTION.to_string();
        }
    };

    result
        .solution
        .and_then(|solution| solution_to_string(&solution).ok())
        .unwrap_or_else(|| NO_SOLUTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(s: &str) -> Puzzle {
        s.parse().unwrap()
    }

    #[test]
    fn test_solve_send_more_money() {
        assert_eq!(solve("SEND+MORE=MONEY"), "75160892");
    }

    #[test]
    fn test_solve_tiny_addition() {
        // A=1, B=2, C=3 is the first hit with ascending digits and no leading zeros
        assert_eq!(solve("A+B=C"), "123");
    }

    #[test]
    fn test_solve_tiny_subtraction() {
        assert_eq!(solve("A-B=C"), "312");
    }

    #[test]
    fn test_solve_zero_inside_word() {
        // E is not a leading letter, so it can take 0
        assert_eq!(solve("NO+NO=YES"), "05241");
    }

    #[test]
    fn test_solve_unsolvable() {
        assert_eq!(solve("A+A=A"), NO_SOLUTION);
        assert_eq!(solve("X+Y=XY"), NO_SOLUTION);
    }

    #[test]
    fn test_solve_malformed() {
        assert_eq!(solve(""), NO_SOLUTION);
        assert_eq!(solve("SEND+MORE"), NO_SOLUTION);
        assert_eq!(solve("send+more=money"), NO_SOLUTION);
    }

    #[test]
    fn test_too_many_letters_skips_search() {
        let p = puzzle("ABCDEF+GHIJK=LMNOP");
        let result = solve_puzzle_with(&p, &SolveOptions::default());
        assert_eq!(result.status, SolveStatus::TooManyLetters { count: 16 });
        assert!(result.solution.is_none());
        assert_eq!(result.stats, SearchStats::default());
    }

    #[test]
    fn test_solve_puzzle_returns_assignment() {
        let p = puzzle("I+BB=ILL");
        let a = solve_puzzle(&p).unwrap();
        assert_eq!(a.get('I'), Some(1));
        assert_eq!(a.get('B'), Some(9));
        assert_eq!(a.get('L'), Some(0));
        assert_eq!(a.decode("I").unwrap() + a.decode("BB").unwrap(), a.decode("ILL").unwrap());
    }

    #[test]
    fn test_stats_are_counted() {
        let result = solve_puzzle_with(&puzzle("A+B=C"), &SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Solved);
        // A=1, then B=2, then C tries 3 and is accepted at once
        assert_eq!(result.stats, SearchStats { nodes: 3, leaves: 1 });
    }

    #[test]
    fn test_exhausted_search_restores_assignment() {
        let p = puzzle("A+A=A");
        let ctx = SearchCtx {
            puzzle: &p,
            column_sum: ColumnSum::new(&p),
            budget: TimeBudget::new(None),
        };
        let mut assignment = Assignment::default();
        let mut stats = SearchStats::default();
        assert_eq!(backtrack(&mut assignment, 0, &ctx, &mut stats), Step::Exhausted);
        assert!(assignment.is_empty());
        // single leading letter: digits 1-9, each a leaf
        assert_eq!(stats, SearchStats { nodes: 9, leaves: 9 });
    }

    #[test]
    fn test_zero_time_budget_times_out() {
        let options = SolveOptions { time_budget: Some(Duration::ZERO) };
        let result = solve_puzzle_with(&puzzle("SEND+MORE=MONEY"), &options);
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert!(result.solution.is_none());
    }

    #[test]
    fn test_generous_time_budget_solves() {
        let options = SolveOptions { time_budget: Some(Duration::from_secs(600)) };
        let result = solve_puzzle_with(&puzzle("TWO+TWO=FOUR"), &options);
        assert_eq!(result.status, SolveStatus::Solved);
    }

    #[test]
    fn test_column_sum_addition() {
        let p = puzzle("SEND+MORE=MONEY");
        let sum = ColumnSum::new(&p);
        let mut a = Assignment::default();
        for (c, d) in [('S', 9), ('E', 5), ('N', 6), ('D', 7), ('M', 1), ('O', 0), ('R', 8), ('Y', 2)] {
            a.assign(c, d);
        }
        assert!(sum.holds(&a));

        a.unassign('Y');
        assert!(!sum.holds(&a), "unassigned letters never satisfy the equation");
        a.assign('Y', 3);
        assert!(!sum.holds(&a));
    }

    #[test]
    fn test_column_sum_subtraction() {
        let p = puzzle("ABCD-EFGH=IJ");
        let sum = ColumnSum::new(&p);
        let mut a = Assignment::default();
        // 2034 - 1956 = 78
        for (c, d) in "ABCDEFGHIJ".chars().zip([2, 0, 3, 4, 1, 9, 5, 6, 7, 8]) {
            a.assign(c, d);
        }
        assert!(sum.holds(&a));
    }

    #[test]
    fn test_column_sum_negative_difference() {
        // 1 - 2 is never a non-negative word
        let p = puzzle("A-B=C");
        let sum = ColumnSum::new(&p);
        let mut a = Assignment::default();
        a.assign('A', 1);
        a.assign('B', 2);
        a.assign('C', 9);
        assert!(!sum.holds(&a));
    }

    #[test]
    fn test_column_sum_long_words() {
        // 30 columns: 111...1 + 888...8 = 999...9
        let p = Puzzle::new(&"A".repeat(30), Operator::Add, &"B".repeat(30), &"C".repeat(30)).unwrap();
        let sum = ColumnSum::new(&p);
        let mut a = Assignment::default();
        a.assign('A', 1);
        a.assign('B', 8);
        a.assign('C', 9);
        assert!(sum.holds(&a));

        // 555...5 + 555...5 carries into every column, so it is never 000...0
        let p = Puzzle::new(&"A".repeat(30), Operator::Add, &"A".repeat(30), &"C".repeat(30)).unwrap();
        let sum = ColumnSum::new(&p);
        let mut a = Assignment::default();
        a.assign('A', 5);
        a.assign('C', 0);
        assert!(!sum.holds(&a));
    }

    #[test]
    fn test_decoded_check() {
        let p = puzzle("ABCD-EFGH=IJ");
        let mut a = Assignment::default();
        for (c, d) in "ABCDEFGHIJ".chars().zip([2, 0, 3, 4, 1, 9, 5, 6, 7, 8]) {
            a.assign(c, d);
        }
        assert_eq!(decoded_check(&p, &a), Some(true));

        a.unassign('J');
        assert_eq!(decoded_check(&p, &a), None);
        a.assign('J', 9);
        assert_eq!(decoded_check(&p, &a), Some(false));

        // 40 digits do not fit in a u128
        let p = Puzzle::new(&"A".repeat(40), Operator::Add, "B", "C").unwrap();
        let mut a = Assignment::default();
        for (c, d) in [('A', 1), ('B', 2), ('C', 3)] {
            a.assign(c, d);
        }
        assert_eq!(decoded_check(&p, &a), None);
    }

    #[test]
    fn test_solution_rendering() {
        let result = solve_equation("SEND+MORE=MONEY", &SolveOptions::default()).unwrap();
        let solution = result.solution.unwrap();
        assert_eq!(solution_to_string(&solution).unwrap(), "75160892");
        assert_eq!(solution.mapping(), "D=7 E=5 M=1 N=6 O=0 R=8 S=9 Y=2");
        assert_eq!(solution.decoded_equation(), "9567 + 1085 = 10652");
    }

    #[test]
    fn test_solution_to_string_incomplete() {
        let solution = Solution { puzzle: puzzle("A+B=C"), assignment: Assignment::default() };
        let err = solution_to_string(&solution).unwrap_err();
        assert_eq!(err.code(), "S002");
        assert!(matches!(err, SolverError::IncompleteAssignment { letter: 'A' }));
        assert_eq!(solution.mapping(), "A=? B=? C=?");
        assert_eq!(solution.decoded_equation(), "? + ? = ?");
    }

    #[test]
    fn test_solve_equation_parse_failure() {
        let err = solve_equation("A+B", &SolveOptions::default()).unwrap_err();
        assert_eq!(err.code(), "S001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("S001"));
        assert!(detailed.contains("E002"));
    }

    #[test]
    fn test_solver_error_codes_and_help() {
        let err = SolverError::IncompleteAssignment { letter: 'Q' };
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("S002"));
        assert!(detailed.contains("'Q'"));
        assert!(!err.description().is_empty());
        assert!(!err.details().is_empty());
    }
}
