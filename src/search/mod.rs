//! The four search strategies and their common result type.
//!
//! Every strategy:
//! - returns at once, with one generated node and zero elapsed time, when the
//!   initial board is already the goal
//! - goal-tests a node when it leaves the frontier, not when it enters
//! - keeps its whole explored tree in a [`NodeArena`] owned by the outcome
//! - counts every node it creates, root included, as generated
//!
//! Tie-break sequence numbers for the priority-queue strategies are local to
//! each call, so runs never influence one another.

mod astar;
mod greedy;
mod uninformed;

use std::fmt;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::node::{Node, NodeArena, NodeId, Step};

pub use astar::solve_astar;
pub use greedy::solve_greedy;
pub use uninformed::{solve_uninformed, Uninformed};

/// Depth limit the reference run uses for depth-first search.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// What a search produced.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Every node the search created.
    pub tree: NodeArena,
    /// Node holding the goal board, if one was reached.
    pub goal: Option<NodeId>,
    pub nodes_generated: usize,
    /// Entries left in the frontier on success; 0 on exhaustion.
    pub frontier_len: usize,
    pub elapsed: Duration,
}

impl SearchOutcome {
    fn already_solved(initial: Board) -> Self {
        let mut tree = NodeArena::new();
        let root = tree.root(initial);
        Self {
            tree,
            goal: Some(root),
            nodes_generated: 1,
            frontier_len: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn found(tree: NodeArena, goal: NodeId, frontier_len: usize, started: Instant) -> Self {
        Self {
            nodes_generated: tree.len(),
            tree,
            goal: Some(goal),
            frontier_len,
            elapsed: started.elapsed(),
        }
    }

    fn exhausted(tree: NodeArena, started: Instant) -> Self {
        Self {
            nodes_generated: tree.len(),
            tree,
            goal: None,
            frontier_len: 0,
            elapsed: started.elapsed(),
        }
    }

    fn traced(self, algorithm: &str) -> Self {
        tracing::debug!(
            algorithm,
            solved = self.is_solved(),
            cost = self.cost(),
            nodes_generated = self.nodes_generated,
            frontier_len = self.frontier_len,
            elapsed_secs = self.elapsed_secs(),
            "search finished"
        );
        self
    }

    pub fn is_solved(&self) -> bool {
        self.goal.is_some()
    }

    /// The terminal node, if the goal was reached.
    pub fn terminal(&self) -> Option<&Node> {
        self.goal.map(|id| &self.tree[id])
    }

    /// Number of moves in the solution found.
    pub fn cost(&self) -> Option<u32> {
        self.terminal().map(|node| node.cost)
    }

    /// The solution from the initial board to the goal.
    pub fn path(&self) -> Option<Vec<Step>> {
        self.goal.map(|id| self.tree.reconstruct_path(id))
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Selects one of the search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Breadth,
    Depth { max_depth: Option<u32> },
    Greedy,
    AStar,
}

impl Algorithm {
    /// The four strategies in the order the command-line report runs them.
    pub const ALL_DEFAULT: [Algorithm; 4] = [
        Algorithm::Breadth,
        Algorithm::Depth {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        },
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Breadth => "BFS",
            Algorithm::Depth { .. } => "DFS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the strategy always returns a minimum-move solution.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::Breadth | Algorithm::AStar)
    }

    pub fn run(&self, initial: Board) -> SearchOutcome {
        match *self {
            Algorithm::Breadth => solve_uninformed(initial, Uninformed::Breadth),
            Algorithm::Depth { max_depth } => {
                solve_uninformed(initial, Uninformed::Depth { max_depth })
            }
            Algorithm::Greedy => solve_greedy(initial),
            Algorithm::AStar => solve_astar(initial),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, GOAL};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rustc_hash::FxHashMap;
    use std::collections::VecDeque;

    /// Move distance to the goal for every board reachable from it.
    fn distance_table() -> FxHashMap<Board, u32> {
        let mut distances = FxHashMap::default();
        distances.insert(GOAL, 0);
        let mut queue = VecDeque::from([GOAL]);
        while let Some(board) = queue.pop_front() {
            let d = distances[&board];
            for (_, next) in board.successors() {
                distances.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    d + 1
                });
            }
        }
        distances
    }

    fn assert_valid_path(outcome: &SearchOutcome, initial: Board) {
        let path = outcome.path().expect("solved outcome must have a path");
        let cost = outcome.cost().unwrap();

        assert_eq!(path.len(), cost as usize + 1);
        assert_eq!(path[0].state, initial);
        assert_eq!(path[0].action, None);
        assert!(path.last().unwrap().state.is_goal());

        for pair in path.windows(2) {
            let action: Action = pair[1].action.expect("non-root step must carry an action");
            assert_eq!(pair[0].state.apply(action), Some(pair[1].state));
        }
    }

    #[test]
    fn test_already_solved_returns_immediately() {
        for algorithm in Algorithm::ALL_DEFAULT {
            let outcome = algorithm.run(GOAL);
            assert_eq!(outcome.cost(), Some(0), "{algorithm}");
            assert_eq!(outcome.nodes_generated, 1, "{algorithm}");
            assert_eq!(outcome.frontier_len, 0, "{algorithm}");
            assert_eq!(outcome.elapsed, Duration::ZERO, "{algorithm}");
            assert_eq!(outcome.path().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_every_algorithm_solves_the_reference_board() {
        let initial = Board::new([1, 3, 6, 5, 2, 0, 4, 7, 8]);
        for algorithm in Algorithm::ALL_DEFAULT {
            let outcome = algorithm.run(initial);
            assert!(outcome.is_solved(), "{algorithm} found nothing");
            assert_eq!(outcome.terminal().unwrap().state, GOAL);
            assert!(outcome.nodes_generated >= 1);
            assert_valid_path(&outcome, initial);
        }
    }

    #[test]
    fn test_optimal_strategies_match_distance_table() {
        let distances = distance_table();
        assert_eq!(distances.len(), 181_440);

        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..6 {
            let initial = Board::random_solvable(&mut rng);
            let expected = distances[&initial];
            for algorithm in [Algorithm::Breadth, Algorithm::AStar] {
                let outcome = algorithm.run(initial);
                assert_eq!(outcome.cost(), Some(expected), "{algorithm} on {initial:?}");
                assert_valid_path(&outcome, initial);
            }
        }
    }

    #[test]
    fn test_suboptimal_strategies_still_return_valid_paths() {
        let distances = distance_table();
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..4 {
            let initial = Board::random_solvable(&mut rng);
            let outcome = solve_greedy(initial);
            assert!(outcome.is_solved());
            assert!(outcome.cost().unwrap() >= distances[&initial]);
            assert_valid_path(&outcome, initial);
        }
    }

    #[test]
    fn test_repeated_runs_agree_on_cost() {
        let initial = Board::new([4, 1, 2, 0, 8, 7, 6, 3, 5]);
        for algorithm in Algorithm::ALL_DEFAULT {
            let first = algorithm.run(initial);
            let second = algorithm.run(initial);
            assert_eq!(first.cost(), second.cost(), "{algorithm}");
            assert_eq!(first.nodes_generated, second.nodes_generated, "{algorithm}");
        }
    }

    #[test]
    fn test_reference_board_metrics() {
        let initial = Board::new([1, 3, 6, 5, 2, 0, 4, 7, 8]);
        let expected = [
            // (algorithm, cost, nodes generated, frontier left)
            (Algorithm::Breadth, 7, 198, 87),
            (Algorithm::ALL_DEFAULT[1], 43, 86_065, 28),
            (Algorithm::Greedy, 7, 15, 7),
            (Algorithm::AStar, 7, 15, 7),
        ];
        for (algorithm, cost, nodes, frontier) in expected {
            let outcome = algorithm.run(initial);
            assert_eq!(outcome.cost(), Some(cost), "{algorithm}");
            assert_eq!(outcome.nodes_generated, nodes, "{algorithm}");
            assert_eq!(outcome.frontier_len, frontier, "{algorithm}");
        }
    }

    #[test]
    fn test_unsolvable_board_exhausts_every_frontier() {
        let initial = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        let expected = [
            (Algorithm::Breadth, 181_440),
            (Algorithm::ALL_DEFAULT[1], 130_187),
            (Algorithm::Greedy, 181_440),
            (Algorithm::AStar, 186_595),
        ];
        for (algorithm, nodes) in expected {
            let outcome = algorithm.run(initial);
            assert!(!outcome.is_solved(), "{algorithm}");
            assert_eq!(outcome.path(), None);
            assert_eq!(outcome.frontier_len, 0, "{algorithm}");
            assert_eq!(outcome.nodes_generated, nodes, "{algorithm}");
        }
    }

    #[test]
    fn test_optimality_flags() {
        assert!(Algorithm::Breadth.is_optimal());
        assert!(Algorithm::AStar.is_optimal());
        assert!(!Algorithm::Greedy.is_optimal());
        assert!(!Algorithm::Depth { max_depth: None }.is_optimal());
    }
}
