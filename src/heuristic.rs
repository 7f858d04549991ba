//! Manhattan-distance estimate of the moves left to the goal.

use crate::board::{Board, BLANK};
use crate::grid::idx_to_cell;

/// Sum over the non-blank tiles of the grid distance to their goal cell.
///
/// Each move shifts one tile by one cell, changing the sum by exactly one,
/// so the estimate is admissible and consistent.
pub fn manhattan(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(idx, &tile)| {
            let (row, col) = idx_to_cell(idx);
            let (goal_row, goal_col) = idx_to_cell(tile as usize - 1);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}
