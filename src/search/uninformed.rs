//! Breadth-first and depth-limited depth-first search.

use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::node::{NodeArena, NodeId};

use super::SearchOutcome;

/// Which end of the frontier an uninformed search takes nodes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Uninformed {
    /// FIFO.
    Breadth,
    /// LIFO. Nodes at `max_depth` or deeper are goal-tested but not expanded.
    Depth { max_depth: Option<u32> },
}

impl Uninformed {
    fn name(self) -> &'static str {
        match self {
            Uninformed::Breadth => "BFS",
            Uninformed::Depth { .. } => "DFS",
        }
    }

    #[inline]
    fn pop(self, frontier: &mut VecDeque<NodeId>) -> Option<NodeId> {
        match self {
            Uninformed::Breadth => frontier.pop_front(),
            Uninformed::Depth { .. } => frontier.pop_back(),
        }
    }

    #[inline]
    fn may_expand(self, cost: u32) -> bool {
        match self {
            Uninformed::Depth {
                max_depth: Some(limit),
            } => cost < limit,
            _ => true,
        }
    }
}

/// Runs breadth-first or depth-first search from `initial`.
///
/// A board is marked visited when it enters the frontier, so no board is
/// ever queued twice.
pub fn solve_uninformed(initial: Board, strategy: Uninformed) -> SearchOutcome {
    let started = Instant::now();
    let name = strategy.name();
    tracing::debug!(algorithm = name, ?initial, "search started");

    if initial.is_goal() {
        return SearchOutcome::already_solved(initial).traced(name);
    }

    let mut tree = NodeArena::new();
    let root = tree.root(initial);
    let mut frontier = VecDeque::from([root]);
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    visited.insert(initial);

    while let Some(current) = strategy.pop(&mut frontier) {
        let node = tree[current];

        if node.state.is_goal() {
            return SearchOutcome::found(tree, current, frontier.len(), started).traced(name);
        }

        if !strategy.may_expand(node.cost) {
            continue;
        }

        for (action, state) in node.state.successors() {
            if visited.insert(state) {
                frontier.push_back(tree.child(current, action, state));
            }
        }
    }

    SearchOutcome::exhausted(tree, started).traced(name)
}
