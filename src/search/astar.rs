//! A* search ordered by `f = g + h`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::heuristic::manhattan;
use crate::node::{NodeArena, NodeId};

use super::SearchOutcome;

const NAME: &str = "A*";

/// Frontier entry: `(f, sequence, node)`, smallest first.
type Entry = Reverse<(u32, u64, NodeId)>;

/// Runs A* from `initial`.
///
/// Instead of decreasing keys in place, a cheaper route to a board pushes a
/// fresh entry; the superseded one is recognised on pop because its cost no
/// longer matches `g_scores`. With a consistent heuristic the first goal
/// expanded is optimal.
pub fn solve_astar(initial: Board) -> SearchOutcome {
    let started = Instant::now();
    tracing::debug!(algorithm = NAME, ?initial, "search started");

    if initial.is_goal() {
        return SearchOutcome::already_solved(initial).traced(NAME);
    }

    let mut tree = NodeArena::new();
    let root = tree.root(initial);
    let mut sequence: u64 = 0;

    let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
    frontier.push(Reverse((manhattan(&initial), sequence, root)));

    let mut g_scores: FxHashMap<Board, u32> = FxHashMap::default();
    g_scores.insert(initial, 0);
    let mut expanded: FxHashSet<Board> = FxHashSet::default();

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        let node = tree[current];

        // stale: a cheaper route to this board was queued later
        if g_scores
            .get(&node.state)
            .is_some_and(|&best| best != node.cost)
        {
            continue;
        }
        if !expanded.insert(node.state) {
            continue;
        }

        if node.state.is_goal() {
            return SearchOutcome::found(tree, current, frontier.len(), started).traced(NAME);
        }

        let new_g = node.cost + 1;
        for (action, state) in node.state.successors() {
            if g_scores.get(&state).is_some_and(|&known| known <= new_g) {
                continue;
            }
            g_scores.insert(state, new_g);
            sequence += 1;
            let child = tree.child(current, action, state);
            frontier.push(Reverse((new_g + manhattan(&state), sequence, child)));
        }
    }

    SearchOutcome::exhausted(tree, started).traced(NAME)
}
