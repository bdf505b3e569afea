#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path through a Maze that requires picking up a Key.
//!
//! ## Introduction
//! A Maze is a rectangular Grid of Tiles. The Agent starts on the Initial Tile and has to
//! reach any of the Goal Tiles, but only after it walked over the Key Tile. Walls can never be
//! entered, and some Tiles are costly terrain that takes longer to walk across than an open Tile.
//!
//! Finding such a Path is split into two independent A* searches: one from the Initial Tile to
//! the Key, and one from the Key to the closest Goal. Both searches use the Manhattan Distance to
//! the nearest objective as their Heuristic, which never overestimates the remaining Cost, so each
//! leg on its own is always an optimal Path.
//!
//! ## Examples
//! Creating the Maze:
//! ```
//! use key_maze::Maze;
//!
//! // X = wall, . = open, I = initial, K = key, G = goal, M = costly terrain
//! let maze = Maze::new(&[
//!     "XXXXXXX",
//!     "XI..K.X",
//!     "X.XMX.X",
//!     "X...XGX",
//!     "XXXXXXX",
//! ])
//! .unwrap();
//!
//! assert_eq!(maze.initial(), (1, 1));
//! assert_eq!(maze.key(), Some((4, 1)));
//! ```
//! Points are always `(column, row)`.
//!
//! ### Pathfinding
//! Solving the whole Maze:
//! ```
//! # use key_maze::Maze;
//! # let maze = Maze::new(&[
//! #     "XXXXXXX",
//! #     "XI..K.X",
//! #     "X.XMX.X",
//! #     "X...XGX",
//! #     "XXXXXXX",
//! # ])
//! # .unwrap();
//! // solve returns Some(Path) on success
//! let path = key_maze::solve(&maze).unwrap();
//!
//! assert_eq!(path.to_string(), "Path[Cost = 6]: R -> R -> R -> R -> D -> D");
//! assert_eq!(maze.test_solution(&path), (true, 6));
//! ```
//!
//! Searching a single leg towards any set of objectives:
//! ```
//! # use key_maze::Maze;
//! use key_maze::search::a_star_search;
//! # let maze = Maze::new(&[
//! #     "XXXXXXX",
//! #     "XI..K.X",
//! #     "X.XMX.X",
//! #     "X...XGX",
//! #     "XXXXXXX",
//! # ])
//! # .unwrap();
//!
//! let to_key = a_star_search(&maze, maze.initial(), maze.objectives(false)).unwrap();
//! assert_eq!(to_key.tokens().collect::<String>(), "RRR");
//! assert_eq!(to_key.cost, 3);
//! ```
//!
//! ### Configuration
//! The Costs of open and costly Tiles can be changed through a [`MazeConfig`]:
//! ```
//! use key_maze::{Maze, MazeConfig};
//!
//! let maze = Maze::with_config(&["IMG"], MazeConfig::default().with_costly_cost(7)).unwrap();
//!
//! assert_eq!(maze.cost((1, 0)), 7);
//! ```

/// A shorthand for Points on the grid, stored as `(column, row)`
pub type Point = (usize, usize);

/// The Type used to represent the Cost of walking a Path
pub type Cost = usize;

/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

#[cfg(feature = "log")]
macro_rules! re_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! re_trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

pub mod action;
pub use self::action::Action;

pub mod maze;
pub use self::maze::{FormatError, Maze, MazeConfig, Replay, Tile};

mod path;
pub use self::path::Path;

pub mod search;
pub use self::search::solve;

/// The most commonly used Types and Functions
pub mod prelude {
    pub use crate::action::{parse_actions, Action};
    pub use crate::maze::{FormatError, Maze, MazeConfig, Replay, Tile};
    pub use crate::search::{a_star_search, solve, solve_many};
    pub use crate::{Cost, Path, Point, PointSet};
}
