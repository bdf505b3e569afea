use std::fmt;

/// The content of a single cell of a [`Maze`](super::Maze)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `'X'`: can never be entered
    Wall,
    /// `'.'`: an ordinary open cell
    Open,
    /// `'I'`: where the Agent starts
    Initial,
    /// `'K'`: has to be visited before any Goal
    Key,
    /// `'G'`: a possible end of the Path
    Goal,
    /// `'M'`: open, but expensive to walk across
    Costly,
}

impl Tile {
    /// Parses a single Maze character, returning `None` for anything outside the alphabet
    pub fn from_char(c: char) -> Option<Tile> {
        Some(match c {
            'X' => Tile::Wall,
            '.' => Tile::Open,
            'I' => Tile::Initial,
            'K' => Tile::Key,
            'G' => Tile::Goal,
            'M' => Tile::Costly,
            _ => return None,
        })
    }

    /// The character this Tile is written as
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => 'X',
            Tile::Open => '.',
            Tile::Initial => 'I',
            Tile::Key => 'K',
            Tile::Goal => 'G',
            Tile::Costly => 'M',
        }
    }

    /// `true` for every Tile except [`Tile::Wall`]
    pub fn is_walkable(self) -> bool {
        self != Tile::Wall
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

#[test]
fn symbols_match_parsing() {
    for c in "X.IKGM".chars() {
        assert_eq!(Tile::from_char(c).map(Tile::symbol), Some(c));
    }
    assert_eq!(Tile::from_char('#'), None);
    assert_eq!(Tile::from_char('x'), None);
}

#[test]
fn only_walls_block() {
    assert!(!Tile::Wall.is_walkable());
    for c in ".IKGM".chars() {
        assert!(Tile::from_char(c).unwrap().is_walkable());
    }
}
