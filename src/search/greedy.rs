//! Greedy best-first search ordered by the heuristic alone.
//!
//! Neither optimal nor complete in general: it ignores path cost, so it can
//! return a much longer path than necessary.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::heuristic::manhattan;
use crate::node::{NodeArena, NodeId};

use super::SearchOutcome;

const NAME: &str = "Greedy";

/// Frontier entry: `(h, sequence, node)`, smallest first.
type Entry = Reverse<(u32, u64, NodeId)>;

/// Runs greedy best-first search from `initial`.
///
/// `in_frontier` only suppresses a duplicate while an earlier copy of the
/// board is still queued; entries whose board was expanded in the meantime
/// are dropped when popped.
pub fn solve_greedy(initial: Board) -> SearchOutcome {
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

    let mut expanded: FxHashSet<Board> = FxHashSet::default();
    let mut in_frontier: FxHashSet<Board> = FxHashSet::default();
    in_frontier.insert(initial);

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        let node = tree[current];

        if expanded.contains(&node.state) {
            continue;
        }
        in_frontier.remove(&node.state);
        expanded.insert(node.state);

        if node.state.is_goal() {
            return SearchOutcome::found(tree, current, frontier.len(), started).traced(NAME);
        }

        for (action, state) in node.state.successors() {
            if expanded.contains(&state) || in_frontier.contains(&state) {
                continue;
            }
            sequence += 1;
            let child = tree.child(current, action, state);
            frontier.push(Reverse((manhattan(&state), sequence, child)));
            in_frontier.insert(state);
        }
    }

    SearchOutcome::exhausted(tree, started).traced(NAME)
}
