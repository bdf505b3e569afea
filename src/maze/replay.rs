use super::{Maze, Tile};
use crate::{Action, Cost};

/// The outcome of walking a sequence of Actions through a [`Maze`].
///
/// See [`Maze::replay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replay {
    /// `true` if the Actions end on a Goal and picked up the Key on the way
    pub valid: bool,
    /// the summed Cost of every Tile entered
    pub cost: Cost,
    /// index of the Action that first stepped onto the Key
    pub key_step: Option<usize>,
    /// index of the Action that would have entered a Wall or left the Grid.
    /// The replay stops there and `cost` only covers the Actions before it.
    pub blocked_at: Option<usize>,
}

impl Maze {
    /// Walks `actions` from the Initial Tile and reports whether they solve this Maze.
    ///
    /// A solution has to end on a Goal after stepping onto the Key, so a Maze without a Key
    /// has no valid solution.
    ///
    /// ## Examples
    /// ```
    /// # use key_maze::{Maze, action::parse_actions};
    /// let maze = Maze::new(&[
    ///     "XXXXX",
    ///     "XIKGX",
    ///     "XXXXX",
    /// ])
    /// .unwrap();
    ///
    /// let replay = maze.replay(&parse_actions("RR").unwrap());
    /// assert!(replay.valid);
    /// assert_eq!(replay.cost, 2);
    /// assert_eq!(replay.key_step, Some(0));
    ///
    /// let replay = maze.replay(&parse_actions("U").unwrap());
    /// assert!(!replay.valid);
    /// assert_eq!(replay.blocked_at, Some(0));
    /// ```
    pub fn replay(&self, actions: &[Action]) -> Replay {
        let mut pos = self.initial;
        let mut replay = Replay {
            valid: false,
            cost: 0,
            key_step: None,
            blocked_at: None,
        };

        for (step, &action) in actions.iter().enumerate() {
            let next = action.apply(pos, self.size()).filter(|&next| !self.is_wall(next));
            let Some(next) = next else {
                re_trace!("replay blocked at step {} ({} from {:?})", step, action, pos);
                replay.blocked_at = Some(step);
                return replay;
            };
            pos = next;
            if replay.key_step.is_none() && self.tile(pos) == Some(Tile::Key) {
                replay.key_step = Some(step);
            }
            replay.cost += self.cost(pos);
        }

        replay.valid = replay.key_step.is_some() && self.is_goal(pos);
        replay
    }

    /// Shorthand for [`Maze::replay`] that only returns `(valid, cost)`.
    pub fn test_solution(&self, actions: &[Action]) -> (bool, Cost) {
        let Replay { valid, cost, .. } = self.replay(actions);
        (valid, cost)
    }
}
