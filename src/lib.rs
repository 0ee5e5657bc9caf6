//! Optimal solver for the n-by-n sliding tile puzzle
//!
//! Two interchangeable drivers search with the Manhattan-distance
//! heuristic: [`Solver`] runs A* on the board and on its [twin] in
//! lockstep, which also proves unsolvability, while [`IdaSolver`] runs
//! iterative-deepening A* in memory proportional to the solution length.
//!
//! [twin]: board::Board::twin
//!
//! # Basic Usage
//!
//! ```
//! use npuzzle::{Board, Solve, Solver};
//!
//! # fn main() -> Result<(), npuzzle::PuzzleError> {
//! let board: Board = "3  0 1 3  4 2 5  7 8 6".parse()?;
//! let solver = Solver::new(&board);
//!
//! assert!(solver.is_solvable());
//! assert_eq!(solver.moves(), Some(4));
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod error;
pub mod ida;
pub mod min_pq;
pub mod solver;

pub use board::{Board, Direction};
pub use error::PuzzleError;
pub use ida::IdaSolver;
pub use solver::Solver;

/// Counters gathered while searching, for diagnostics only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes whose neighbors were generated.
    pub expanded: usize,
    /// Search nodes placed on a frontier.
    pub enqueued: usize,
    /// Cost thresholds tried by iterative deepening.
    pub thresholds: usize,
}

/// The result of solving one initial board.
pub trait Solve {
    fn is_solvable(&self) -> bool;

    /// Minimum number of moves to reach the goal, `None` if unsolvable.
    fn moves(&self) -> Option<usize>;

    /// Boards of a shortest solution, from the initial board to the goal.
    fn solution(&self) -> Option<&[Board]>;

    fn stats(&self) -> &SearchStats;
}
