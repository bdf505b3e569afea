use crate::{Action, Cost};

/// A sequence of Actions through a Maze
///
/// Stores the Actions in `actions` (in walking order) and the total Cost of the Tiles they enter
/// in `cost`. Note that the individual costs of the steps within the Path cannot be retrieved
/// through this struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    /// the Actions, first to last
    pub actions: Vec<Action>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl Path {
    /// creates a new Path with the given sequence of Actions and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use key_maze::{Path, Action::*};
    /// let path = Path::new(vec![Up, Up, Left], 42);
    ///
    /// assert_eq!(path.actions, vec![Up, Up, Left]);
    /// assert_eq!(path.cost, 42);
    /// ```
    pub fn new(actions: Vec<Action>, cost: Cost) -> Path {
        Path { actions, cost }
    }

    /// appends an Action to the Path, adding the Cost of the Tile it enters
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use key_maze::{Path, Action::*};
    /// let mut path = Path::new(vec![Up], 1);
    /// path.append(Right, 3);
    ///
    /// assert_eq!(path.actions, vec![Up, Right]);
    /// assert_eq!(path.cost, 4);
    /// ```
    pub fn append(&mut self, action: Action, cost: Cost) -> &mut Self {
        self.actions.push(action);
        self.cost += cost;
        self
    }

    /// Appends another Path that starts where this one ends.
    /// ## Examples
    /// ```
    /// # use key_maze::{Path, Action::*};
    /// let mut path = Path::new(vec![Up, Up], 2);
    /// path.extend(Path::new(vec![Left], 3));
    ///
    /// assert_eq!(path.actions, vec![Up, Up, Left]);
    /// assert_eq!(path.cost, 5);
    /// ```
    pub fn extend(&mut self, other: Path) -> &mut Self {
        self.actions.extend(other.actions);
        self.cost += other.cost;
        self
    }

    /// The Actions as their single-character tokens: `'U'`, `'D'`, `'L'` or `'R'`
    pub fn tokens(&self) -> impl Iterator<Item = char> + '_ {
        self.actions.iter().map(|action| action.token())
    }
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
    type Output = Action;
    fn index(&self, index: usize) -> &Action {
        &self.actions[index]
    }
}

impl Deref for Path {
    type Target = [Action];
    fn deref(&self) -> &[Action] {
        &self.actions
    }
}

use std::cmp::Ordering;

impl Ord for Path {
    fn cmp(&self, other: &Path) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Path) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.actions.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.actions[0])?;
            for action in self.actions.iter().skip(1) {
                write!(fmt, " -> {}", action)?;
            }
            Ok(())
        }
    }
}
