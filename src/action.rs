//! The four Moves an Agent can make on the Grid

use crate::maze::FormatError;
use crate::Point;

use std::fmt;
use std::str::FromStr;

/// A single step in one of the 4 cardinal directions.
///
/// ```no_code
/// A: Agent
///   U
///   |
/// L-A-R
///   |
///   D
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// one row up (`"U"`)
    Up = 0,
    /// one row down (`"D"`)
    Down = 1,
    /// one column left (`"L"`)
    Left = 2,
    /// one column right (`"R"`)
    Right = 3,
}
pub use self::Action::*;

/// The offset `(column, row)` of every Action, indexed by [`Action::num`]
const UNIT_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Action {
    /// All Actions in the order in which the search expands them
    pub const ALL: [Action; 4] = [Up, Down, Left, Right];

    /// Iterates over [`Action::ALL`]
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Action>> {
        Self::ALL.iter().copied()
    }

    /// The index of this Action in [`Action::ALL`]
    pub fn num(self) -> usize {
        self as usize
    }

    /// The `(column, row)` offset of this Action
    pub fn offset(self) -> (isize, isize) {
        UNIT_OFFSETS[self.num()]
    }

    /// Moves `pos` one step in this direction.
    ///
    /// Returns `None` if the step would leave a Grid of the given `(width, height)`.
    ///
    /// ## Examples
    /// ```
    /// # use key_maze::Action;
    /// assert_eq!(Action::Right.apply((1, 3), (5, 5)), Some((2, 3)));
    /// assert_eq!(Action::Up.apply((1, 0), (5, 5)), None);
    /// assert_eq!(Action::Down.apply((1, 4), (5, 5)), None);
    /// ```
    pub fn apply(self, pos: Point, (width, height): (usize, usize)) -> Option<Point> {
        let (dx, dy) = self.offset();
        let col = pos.0.checked_add_signed(dx)?;
        let row = pos.1.checked_add_signed(dy)?;
        if col < width && row < height {
            Some((col, row))
        } else {
            None
        }
    }

    /// The single-character token of this Action: `'U'`, `'D'`, `'L'` or `'R'`
    pub fn token(self) -> char {
        match self {
            Up => 'U',
            Down => 'D',
            Left => 'L',
            Right => 'R',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.token())
    }
}

impl TryFrom<char> for Action {
    type Error = FormatError;
    fn try_from(token: char) -> Result<Action, FormatError> {
        match token {
            'U' => Ok(Up),
            'D' => Ok(Down),
            'L' => Ok(Left),
            'R' => Ok(Right),
            _ => Err(FormatError::UnknownAction(token.to_string())),
        }
    }
}

impl FromStr for Action {
    type Err = FormatError;
    fn from_str(token: &str) -> Result<Action, FormatError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Action::try_from(c),
            _ => Err(FormatError::UnknownAction(token.to_string())),
        }
    }
}

/// Parses a sequence of Action tokens, like `"DDRR"`.
///
/// Whitespace between the tokens is ignored.
///
/// ## Examples
/// ```
/// # use key_maze::action::{parse_actions, Action::*};
/// assert_eq!(parse_actions("D D R R").unwrap(), vec![Down, Down, Right, Right]);
/// assert!(parse_actions("DX").is_err());
/// ```
pub fn parse_actions(tokens: &str) -> Result<Vec<Action>, FormatError> {
    tokens
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Action::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_in_bounds() {
        let pos = (1, 3);
        assert_eq!(Up.apply(pos, (5, 5)), Some((1, 2)));
        assert_eq!(Down.apply(pos, (5, 5)), Some((1, 4)));
        assert_eq!(Left.apply(pos, (5, 5)), Some((0, 3)));
        assert_eq!(Right.apply(pos, (5, 5)), Some((2, 3)));
    }

    #[test]
    fn apply_at_border() {
        assert_eq!(Left.apply((0, 2), (3, 3)), None);
        assert_eq!(Up.apply((2, 0), (3, 3)), None);
        assert_eq!(Right.apply((2, 2), (3, 3)), None);
        assert_eq!(Down.apply((2, 2), (3, 3)), None);
    }

    #[test]
    fn tokens() {
        let tokens: String = Action::all().map(|a| a.to_string()).collect();
        assert_eq!(tokens, "UDLR");
        assert_eq!("L".parse::<Action>().unwrap(), Left);
        assert_eq!(
            "LR".parse::<Action>(),
            Err(FormatError::UnknownAction("LR".to_string()))
        );
        assert_eq!(
            Action::try_from('x'),
            Err(FormatError::UnknownAction("x".to_string()))
        );
    }
}
