//! Finding Paths through a [`Maze`]
//!
//! [`a_star_search`] finds the cheapest Path from any Point to the closest of a Set of objectives.
//! [`solve`] combines two of those searches into a full solution: first to the Key, then from
//! the Key to the closest Goal.

mod a_star;
pub use self::a_star::a_star_search;

mod node;

use crate::{Cost, Maze, Path, Point, PointSet};

use std::cmp::Ordering;

/// An entry of the frontier: `(node, evaluation, insertion sequence)`.
///
/// Ordered so that a max-heap pops the lowest evaluation first, and the earliest inserted
/// entry among equal evaluations.
#[derive(PartialEq, Eq)]
pub(crate) struct FrontierElement(pub node::NodeID, pub Cost, pub usize);
impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for FrontierElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
    }
}

/// The Manhattan Distance from `pos` to the closest of `objectives`.
///
/// Every step costs at least 1 and moves by exactly one row or column, so this never
/// overestimates. Returns 0 for an empty Set.
///
/// ## Examples
/// ```
/// # use key_maze::{search::heuristic, PointSet};
/// let objectives: PointSet = [(0, 0), (4, 3)].into_iter().collect();
/// assert_eq!(heuristic((3, 1), &objectives), 1 + 2);
/// ```
pub fn heuristic(pos: Point, objectives: &PointSet) -> Cost {
    objectives
        .iter()
        .map(|goal| pos.0.abs_diff(goal.0) + pos.1.abs_diff(goal.1))
        .min()
        .unwrap_or(0)
}

/// Finds the cheapest Path that starts on the Initial Tile, walks over the Key and ends on any Goal.
///
/// The Path is made of two legs that are searched independently: Initial Tile → Key, then
/// Key → closest Goal. Each leg is optimal on its own. A Maze without a Key has nothing to pick
/// up and is never solved.
///
/// ## Examples
/// ```
/// # use key_maze::Maze;
/// let maze = Maze::new(&[
///     "XXXXXXX",
///     "X..K..X",
///     "XI...GX",
///     "XXXXXXX",
/// ])
/// .unwrap();
///
/// let path = key_maze::solve(&maze).unwrap();
/// assert_eq!(path.cost, 6);
/// assert_eq!(maze.test_solution(&path), (true, 6));
/// ```
///
/// ## Returns
/// the Path, or `None` if the Maze has no Key, or if either the Key or every Goal is unreachable.
pub fn solve(maze: &Maze) -> Option<Path> {
    let mut path = a_star_search(maze, maze.initial(), maze.objectives(false))?;
    let key = maze.key()?;
    re_debug!("reached key {:?} with cost {}", key, path.cost);

    let to_goal = a_star_search(maze, key, maze.objectives(true))?;
    re_debug!("reached goal from key with cost {}", to_goal.cost);

    path.extend(to_goal);
    Some(path)
}

/// Calls [`solve`] on every Maze, returning the results in the same order.
pub fn solve_many(mazes: &[Maze]) -> Vec<Option<Path>> {
    mazes.iter().map(solve).collect()
}

/// Same as [`solve_many`], but solves the Mazes on the rayon thread pool.
///
/// Every individual search still runs on a single thread.
#[cfg(feature = "parallel")]
pub fn solve_many_parallel(mazes: &[Maze]) -> Vec<Option<Path>> {
    use rayon::prelude::*;

    mazes.par_iter().map(solve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::parse_actions;
    use std::collections::BinaryHeap;

    #[test]
    fn frontier_pops_lowest_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierElement(0, 5, 0));
        heap.push(FrontierElement(1, 3, 1));
        heap.push(FrontierElement(2, 3, 2));
        heap.push(FrontierElement(3, 4, 3));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.0)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn heuristic_picks_closest() {
        let objectives: PointSet = [(1, 1), (5, 5)].into_iter().collect();
        assert_eq!(heuristic((4, 4), &objectives), 2);
        assert_eq!(heuristic((1, 1), &objectives), 0);
        assert_eq!(heuristic((1, 1), &PointSet::default()), 0);
    }

    #[test]
    fn solve_concatenates_legs() {
        let maze = Maze::new(&[
            "XXXXXX", //
            "XIKXGX",
            "X....X",
            "XXXXXX",
        ])
        .unwrap();

        let path = solve(&maze).unwrap();
        assert_eq!(path.actions, parse_actions("RDRRU").unwrap());
        assert_eq!(path.cost, 5);
    }

    #[test]
    fn keyless_maze() {
        let maze = Maze::new(&["I.MG"]).unwrap();
        assert_eq!(solve(&maze), None);

        let direct = a_star_search(&maze, maze.initial(), maze.goals()).unwrap();
        assert_eq!(direct.tokens().collect::<String>(), "RRR");
        assert_eq!(direct.cost, 5);
    }

    #[test]
    fn unreachable_goal_after_key() {
        let maze = Maze::new(&["IKXG"]).unwrap();
        assert_eq!(solve(&maze), None);
    }

    #[test]
    fn many() {
        let mazes = vec![
            Maze::new(&["IKG"]).unwrap(),
            Maze::new(&["IKXG"]).unwrap(),
            Maze::new(&["GIK"]).unwrap(),
        ];
        let costs: Vec<_> = solve_many(&mazes)
            .into_iter()
            .map(|path| path.map(|p| p.cost))
            .collect();
        assert_eq!(costs, vec![Some(2), None, Some(3)]);

        #[cfg(feature = "parallel")]
        assert_eq!(solve_many_parallel(&mazes), solve_many(&mazes));
    }
}
