//! Error types for reading boards from text.
//!
//! The search engine itself never fails: an unreachable goal is reported as
//! an outcome without a terminal node. Errors only arise at the input
//! boundary, when a caller hands us something that is not a permutation of
//! the tiles 0 through 8.

use thiserror::Error;

/// Error raised when text cannot be turned into a board.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("expected {expected} tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },

    #[error("'{token}' is not a tile number")]
    NotANumber { token: String },

    #[error("tile {tile} is out of range (must be 0-{max})")]
    TileOutOfRange { tile: u32, max: u8 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
