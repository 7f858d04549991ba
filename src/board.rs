//! Board states and successor generation.
//!
//! A board is a row-major array of nine tiles, `0` standing for the blank.
//! Boards are plain `Copy` values; equality of the tile sequence is the only
//! identity used when deduplicating states during search.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{cell_to_idx, format_board, idx_to_cell};

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Tile value used for the blank.
pub const BLANK: u8 = 0;

/// The solved configuration.
pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 0]);

/// A move of the blank. The adjacent tile slides the opposite way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Generation order for successors. Every search breaks ties by it.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Row and column delta applied to the blank.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// A board configuration.
///
/// Construction through [`Board::new`] trusts the caller to pass a
/// permutation of `0..=8`; [`Board::from_tiles`] and the `FromStr` impl
/// validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board([u8; CELLS]);

impl Board {
    pub const fn new(tiles: [u8; CELLS]) -> Self {
        Self(tiles)
    }

    /// Builds a board after checking that `tiles` is a permutation of `0..=8`.
    pub fn from_tiles(tiles: &[u32]) -> Result<Self> {
        if tiles.len() != CELLS {
            return Err(Error::WrongTileCount {
                expected: CELLS,
                got: tiles.len(),
            });
        }

        let mut board = [BLANK; CELLS];
        let mut seen = [false; CELLS];
        for (cell, &tile) in board.iter_mut().zip(tiles) {
            if tile as usize >= CELLS {
                return Err(Error::TileOutOfRange {
                    tile,
                    max: (CELLS - 1) as u8,
                });
            }
            let tile = tile as u8;
            if seen[tile as usize] {
                return Err(Error::DuplicateTile { tile });
            }
            seen[tile as usize] = true;
            *cell = tile;
        }

        Ok(Self(board))
    }

    /// Returns a uniformly shuffled board with even inversion parity.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = GOAL.0;
        loop {
            tiles.shuffle(rng);
            let board = Self(tiles);
            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Linear index of the blank.
    ///
    /// # Panics
    /// Panics if the board holds no blank, which a permutation of `0..=8`
    /// always does.
    pub fn blank_index(&self) -> usize {
        self.0
            .iter()
            .position(|&tile| tile == BLANK)
            .expect("board must contain the blank tile")
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Moves the blank one cell, or returns `None` if it would leave the grid.
    pub fn apply(&self, action: Action) -> Option<Board> {
        self.apply_from(self.blank_index(), action)
    }

    fn apply_from(&self, blank: usize, action: Action) -> Option<Board> {
        let (row, col) = idx_to_cell(blank);
        let (d_row, d_col) = action.offset();
        let new_row = row.checked_add_signed(d_row).filter(|&r| r < SIDE)?;
        let new_col = col.checked_add_signed(d_col).filter(|&c| c < SIDE)?;

        let mut tiles = self.0;
        tiles.swap(blank, cell_to_idx(new_row, new_col));
        Some(Board(tiles))
    }

    /// Legal neighbouring boards in [`Action::ALL`] order.
    ///
    /// Yields two successors in a corner, three on an edge and four in the
    /// centre.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> {
        let board = *self;
        let blank = board.blank_index();
        Action::ALL
            .into_iter()
            .filter_map(move |action| board.apply_from(blank, action).map(|next| (action, next)))
    }

    /// Number of tile pairs (blank excluded) that appear in reverse order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On an odd-width board every move preserves inversion parity, and the
    /// goal has none, so exactly the even-parity boards are solvable.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine tile numbers separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self> {
        let tiles = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u32>().map_err(|_| Error::NotANumber {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Board::from_tiles(&tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_successor_counts_by_blank_position() {
        // corner, edge, centre
        let corner = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let edge = Board::new([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let centre = Board::new([1, 2, 3, 4, 0, 5, 6, 7, 8]);

        assert_eq!(corner.successors().count(), 2);
        assert_eq!(edge.successors().count(), 3);
        assert_eq!(centre.successors().count(), 4);
    }

    #[test]
    fn test_successors_follow_fixed_action_order() {
        let centre = Board::new([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let actions: Vec<Action> = centre.successors().map(|(a, _)| a).collect();
        assert_eq!(actions, Action::ALL.to_vec());

        let goal_actions: Vec<Action> = GOAL.successors().map(|(a, _)| a).collect();
        assert_eq!(goal_actions, vec![Action::Up, Action::Left]);
    }

    #[test]
    fn test_successor_swaps_blank_with_neighbour() {
        let (action, next) = GOAL.successors().next().unwrap();
        assert_eq!(action, Action::Up);
        assert_eq!(next, Board::new([1, 2, 3, 4, 5, 0, 7, 8, 6]));

        let back = next.apply(Action::Up.opposite()).unwrap();
        assert_eq!(back, GOAL);
    }

    #[test]
    fn test_apply_rejects_moves_off_the_grid() {
        assert_eq!(GOAL.apply(Action::Down), None);
        assert_eq!(GOAL.apply(Action::Right), None);
        assert!(GOAL.apply(Action::Left).is_some());
    }

    #[test]
    fn test_parse_accepts_spaces_and_commas() {
        let spaced: Board = "1 3 6 5 2 0 4 7 8".parse().unwrap();
        let commas: Board = "1,3,6, 5,2,0,4 ,7,8".parse().unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced.tiles(), &[1, 3, 6, 5, 2, 0, 4, 7, 8]);
        assert_eq!(spaced.blank_index(), 5);
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        assert_eq!(
            "1 2 3".parse::<Board>(),
            Err(Error::WrongTileCount {
                expected: 9,
                got: 3
            })
        );
        assert_eq!(
            "1 2 3 4 5 6 7 8 9".parse::<Board>(),
            Err(Error::TileOutOfRange { tile: 9, max: 8 })
        );
        assert_eq!(
            "1 1 3 4 5 6 7 8 0".parse::<Board>(),
            Err(Error::DuplicateTile { tile: 1 })
        );
        assert_eq!(
            "1 x 3 4 5 6 7 8 0".parse::<Board>(),
            Err(Error::NotANumber {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_parity_solvability() {
        assert!(GOAL.is_solvable());
        assert_eq!(GOAL.inversions(), 0);

        // swapping two tiles without touching the blank flips parity
        let swapped = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.is_solvable());

        let scenario = Board::new([1, 3, 6, 5, 2, 0, 4, 7, 8]);
        assert!(scenario.is_solvable());
    }

    #[test]
    fn test_moves_preserve_parity() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = Board::random_solvable(&mut rng);
            for (_, next) in board.successors() {
                assert!(next.is_solvable(), "{next:?} lost parity");
            }
        }
    }

    #[test]
    fn test_random_solvable_is_deterministic_per_seed() {
        let first = Board::random_solvable(&mut SmallRng::seed_from_u64(42));
        let second = Board::random_solvable(&mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert!(first.is_solvable());

        let mut sorted = *first.tiles();
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_action_display() {
        let names: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["UP", "DOWN", "LEFT", "RIGHT"]);
    }
}
