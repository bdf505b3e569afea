//! The State-Space of a Maze: Tiles, Transitions and Costs

mod config;
pub use self::config::MazeConfig;

mod error;
pub use self::error::{FormatError, Result};

mod replay;
pub use self::replay::Replay;

mod tile;
pub use self::tile::Tile;

use crate::{Action, Cost, Point, PointSet};

/// A rectangular Grid of [`Tile`]s with one Initial Tile, at most one Key and any number of Goals.
///
/// The Maze is immutable once created. It answers the questions a search needs to ask
/// (where can I go from here, what does it cost, am I done) without knowing anything about
/// the search itself.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    initial: Point,
    key: Option<Point>,
    key_set: PointSet,
    goals: PointSet,
    config: MazeConfig,
}

impl Maze {
    /// Creates a new Maze from its rows, using the default [`MazeConfig`].
    ///
    /// Every character has to be one of
    /// - `'X'`: a Wall
    /// - `'.'`: an open Tile
    /// - `'I'`: the Initial Tile (exactly one)
    /// - `'K'`: the Key (at most one)
    /// - `'G'`: a Goal
    /// - `'M'`: costly terrain
    ///
    /// ## Examples
    /// ```
    /// # use key_maze::{Maze, FormatError};
    /// let maze = Maze::new(&[
    ///     "XXXXX",
    ///     "XI.GX",
    ///     "XXXXX",
    /// ]);
    /// assert!(maze.is_ok());
    ///
    /// let broken = Maze::new(&["XI#GX"]);
    /// assert_eq!(broken.unwrap_err(), FormatError::UnknownTile { tile: '#', col: 2, row: 0 });
    /// ```
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Maze> {
        Maze::with_config(rows, MazeConfig::default())
    }

    /// Creates a new Maze from its rows with custom terrain Costs.
    ///
    /// See [`Maze::new`] for the format of the rows.
    pub fn with_config<S: AsRef<str>>(rows: &[S], config: MazeConfig) -> Result<Maze> {
        config.validate()?;

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());

        let mut tiles = Vec::with_capacity(width * height);
        let mut initial = None;
        let mut key = None;
        let mut goals = PointSet::default();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(FormatError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or(FormatError::UnknownTile { tile: c, col, row })?;
                match tile {
                    Tile::Initial => {
                        if initial.replace((col, row)).is_some() {
                            return Err(FormatError::MultipleInitial((col, row)));
                        }
                    }
                    Tile::Key => {
                        if key.replace((col, row)).is_some() {
                            return Err(FormatError::MultipleKeys((col, row)));
                        }
                    }
                    Tile::Goal => {
                        goals.insert((col, row));
                    }
                    Tile::Wall | Tile::Open | Tile::Costly => {}
                }
                tiles.push(tile);
            }
        }

        let initial = initial.ok_or(FormatError::MissingInitial)?;
        let key_set = key.into_iter().collect();

        re_debug!(
            "created {}x{} maze: initial {:?}, key {:?}, {} goal(s)",
            width,
            height,
            initial,
            key,
            goals.len()
        );

        Ok(Maze {
            width,
            height,
            tiles,
            initial,
            key,
            key_set,
            goals,
            config,
        })
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// The `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The Costs this Maze was created with
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Where the Agent starts
    pub fn initial(&self) -> Point {
        self.initial
    }

    /// The Key, if this Maze has one
    pub fn key(&self) -> Option<Point> {
        self.key
    }

    /// All Goal Tiles
    pub fn goals(&self) -> &PointSet {
        &self.goals
    }

    /// The Tile at `pos`, or `None` if `pos` is outside of the Grid
    pub fn tile(&self, pos: Point) -> Option<Tile> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(self.tiles[pos.1 * self.width + pos.0])
        } else {
            None
        }
    }

    /// `true` if `pos` is a Wall. Points outside of the Grid are not Walls.
    pub fn is_wall(&self, pos: Point) -> bool {
        self.tile(pos) == Some(Tile::Wall)
    }

    /// `true` if `pos` is one of the Goals
    pub fn is_goal(&self, pos: Point) -> bool {
        self.goals.contains(&pos)
    }

    /// `true` if `pos` is the Key
    pub fn is_key(&self, pos: Point) -> bool {
        self.key == Some(pos)
    }

    /// The Cost of entering `pos`.
    ///
    /// Walls are never entered, so their Cost is meaningless.
    ///
    /// ## Examples
    /// ```
    /// # use key_maze::Maze;
    /// let maze = Maze::new(&["I.MG"]).unwrap();
    /// assert_eq!(maze.cost((1, 0)), 1);
    /// assert_eq!(maze.cost((2, 0)), 3);
    /// ```
    pub fn cost(&self, pos: Point) -> Cost {
        match self.tile(pos) {
            Some(Tile::Costly) => self.config.costly_cost,
            _ => self.config.open_cost,
        }
    }

    /// All States reachable from `pos` in a single step, together with the Action leading there.
    ///
    /// Actions are tried in the order of [`Action::ALL`]; Walls and Points outside of the Grid
    /// are left out.
    ///
    /// ## Examples
    /// ```
    /// # use key_maze::{Maze, Action};
    /// let maze = Maze::new(&[
    ///     "XXX",
    ///     "XI.",
    ///     "X.X",
    /// ])
    /// .unwrap();
    ///
    /// let next: Vec<_> = maze.transitions((1, 1)).collect();
    /// assert_eq!(next, vec![(Action::Down, (1, 2)), (Action::Right, (2, 1))]);
    /// ```
    pub fn transitions(&self, pos: Point) -> impl Iterator<Item = (Action, Point)> + '_ {
        Action::all().filter_map(move |action| {
            action
                .apply(pos, self.size())
                .filter(|&next| !self.is_wall(next))
                .map(|next| (action, next))
        })
    }

    /// The States the Agent is currently heading for.
    ///
    /// Returns the Key as a single-element Set while `has_key` is `false`, and all Goals
    /// afterwards. A Maze without a Key returns an empty Set for `has_key == false`.
    pub fn objectives(&self, has_key: bool) -> &PointSet {
        if has_key {
            &self.goals
        } else {
            &self.key_set
        }
    }
}
