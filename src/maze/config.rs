use super::{FormatError, Result};
use crate::Cost;

/// Options for configuring the terrain Costs of a [`Maze`](super::Maze)
///
/// Default options:
/// ```
/// # use key_maze::MazeConfig;
/// assert_eq!(
///     MazeConfig {
///         open_cost: 1,
///         costly_cost: 3,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// The Cost of entering any walkable Tile that is not costly terrain (defaults to `1`)
    pub open_cost: Cost,
    /// The Cost of entering a [`Tile::Costly`](super::Tile::Costly) (defaults to `3`)
    ///
    /// Setting this below `open_cost` is allowed, the searches stay optimal as long as
    /// both Costs are at least 1.
    pub costly_cost: Cost,
}

impl MazeConfig {
    /// The default Costs: `1` for open Tiles, `3` for costly terrain
    pub const DEFAULT: MazeConfig = MazeConfig {
        open_cost: 1,
        costly_cost: 3,
    };

    /// Costly terrain is as cheap as any other Tile, making every search purely distance based
    ///
    /// Values:
    /// ```
    /// # use key_maze::MazeConfig;
    /// assert_eq!(
    ///     MazeConfig {
    ///         open_cost: 1,
    ///         costly_cost: 1,
    ///     },
    ///     MazeConfig::UNIFORM
    /// );
    /// ```
    pub const UNIFORM: MazeConfig = MazeConfig {
        open_cost: 1,
        costly_cost: 1,
    };

    /// Returns a copy with `costly_cost` replaced
    pub fn with_costly_cost(self, costly_cost: Cost) -> MazeConfig {
        MazeConfig {
            costly_cost,
            ..self
        }
    }

    /// Fails with [`FormatError::ZeroCost`] if any Cost is 0, which would make the
    /// Manhattan Heuristic overestimate.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.open_cost == 0 || self.costly_cost == 0 {
            return Err(FormatError::ZeroCost);
        }
        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig::DEFAULT
    }
}

#[test]
fn zero_cost_rejected() {
    assert_eq!(MazeConfig::DEFAULT.validate(), Ok(()));
    assert_eq!(
        MazeConfig::DEFAULT.with_costly_cost(0).validate(),
        Err(FormatError::ZeroCost)
    );
    let free = MazeConfig {
        open_cost: 0,
        ..MazeConfig::UNIFORM
    };
    assert_eq!(free.validate(), Err(FormatError::ZeroCost));
}
