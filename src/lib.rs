// Reusable library API, used by the CLI and the helper binaries
pub mod assignment;
pub mod errors;
pub mod log;
pub mod operator;
pub mod parser;
pub mod puzzle_char;
pub mod solver;

pub use assignment::Assignment;
pub use parser::Puzzle;
pub use solver::{solve, solve_equation, solve_puzzle, NO_SOLUTION};
