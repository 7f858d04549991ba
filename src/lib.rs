//! Eight-Puzzle Solver Library
//!
//! Search engine for the 3x3 sliding-tile puzzle: board states, the
//! Manhattan heuristic, an arena of search nodes, and four interchangeable
//! strategies (breadth-first, depth-limited depth-first, greedy best-first
//! and A*).
//!
//! ```
//! use eight_puzzle::{solve_astar, Board};
//!
//! let board: Board = "1 3 6 5 2 0 4 7 8".parse().unwrap();
//! let outcome = solve_astar(board);
//! assert_eq!(outcome.cost(), Some(7));
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod search;

pub use board::{Action, Board, GOAL};
pub use error::{Error, Result};
pub use node::{Node, NodeArena, NodeId, Step};
pub use search::{
    solve_astar, solve_greedy, solve_uninformed, Algorithm, SearchOutcome, Uninformed,
    DEFAULT_MAX_DEPTH,
};
