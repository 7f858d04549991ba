//! Cell indexing and text rendering for the 3x3 grid.
//!
//! Cells are stored row-major: `idx = row * SIDE + col`.

use crate::board::{Board, BLANK, SIDE};
use crate::node::Step;

/// Converts a linear cell index to `(row, col)`.
#[inline(always)]
pub const fn idx_to_cell(idx: usize) -> (usize, usize) {
    (idx / SIDE, idx % SIDE)
}

/// Converts `(row, col)` to a linear cell index.
#[inline(always)]
pub const fn cell_to_idx(row: usize, col: usize) -> usize {
    row * SIDE + col
}

/// Formats a board as three `| a | b | c |` rows, the blank drawn as a space.
pub fn format_board(board: &Board) -> String {
    let mut output = String::new();
    for row in board.tiles().chunks(SIDE) {
        output.push('|');
        for &tile in row {
            let display_char = if tile == BLANK {
                ' '
            } else {
                char::from(b'0' + tile)
            };
            output.push(' ');
            output.push(display_char);
            output.push_str(" |");
        }
        output.push('\n');
    }
    output
}

/// Formats a reconstructed path step by step, one board per step.
pub fn format_path(path: &[Step]) -> String {
    path.iter()
        .enumerate()
        .map(|(i, step)| {
            let label = match step.action {
                Some(action) => format!("ACTION: {action}"),
                None => "START".to_string(),
            };
            format!("Step {i}: ({label})\n{}", format_board(&step.state))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
