use crate::Point;

use thiserror::Error;

/// The Ways a Maze or a sequence of Actions can be formatted invalidly
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// A character that is not part of the Tile alphabet `X . I K G M`
    #[error("unknown tile {tile:?} at ({col}, {row})")]
    UnknownTile {
        /// the offending character
        tile: char,
        /// its column
        col: usize,
        /// its row
        row: usize,
    },
    /// A row whose length differs from the first row
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// index of the row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of this row
        found: usize,
    },
    /// The Maze has no Initial Tile
    #[error("maze has no initial tile")]
    MissingInitial,
    /// The Maze has more than one Initial Tile
    #[error("maze has a second initial tile at {0:?}")]
    MultipleInitial(Point),
    /// The Maze has more than one Key Tile
    #[error("maze has a second key at {0:?}")]
    MultipleKeys(Point),
    /// A [`MazeConfig`](super::MazeConfig) with a walking Cost of 0
    #[error("terrain costs must be at least 1")]
    ZeroCost,
    /// A token that is not one of `U D L R`
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}

/// Shorthand for Results with a [`FormatError`]
pub type Result<T> = std::result::Result<T, FormatError>;
