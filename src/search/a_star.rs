use super::node::SearchTree;
use super::{heuristic, FrontierElement};
use crate::{Maze, Path, Point, PointSet, Tile};

use std::collections::BinaryHeap;

/// Searches a [`Maze`] using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Finds the cheapest Path from `start` to whichever of `objectives` is cheapest to reach. The Cost
/// of a Path is the sum of [`Maze::cost`] over every Tile it enters; `start` itself is free.
///
/// Nodes are expanded in order of their evaluation `f = g + h`, where `h` is the Manhattan
/// Distance to the closest objective (see [`heuristic`](super::heuristic)). Nodes with equal
/// evaluation are expanded in the order they were discovered, and the Actions of a Node are tried
/// in the order of [`Action::ALL`](crate::Action::ALL), so the result is always the same for the
/// same input.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use key_maze::{Maze, search::a_star_search};
/// let maze = Maze::new(&[
///     "XXXXX",
///     "XI..X",
///     "X.X.X",
///     "X..GX",
///     "XXXXX",
/// ])
/// .unwrap();
///
/// let path = a_star_search(&maze, maze.initial(), maze.goals()).unwrap();
///
/// assert_eq!(path.tokens().collect::<String>(), "DDRR");
/// assert_eq!(path.cost, 4);
/// ```
///
/// If no objective can be reached, None is returned:
/// ```
/// # use key_maze::{Maze, search::a_star_search};
/// let maze = Maze::new(&["I.XG"]).unwrap();
///
/// assert_eq!(a_star_search(&maze, maze.initial(), maze.goals()), None);
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if none of the `objectives` is reachable.
/// If `start` already is an objective, the Path has no Actions and a Cost of 0.
/// A `start` outside of the Grid or on a Wall never reaches anything.
pub fn a_star_search(maze: &Maze, start: Point, objectives: &PointSet) -> Option<Path> {
    if !maze.tile(start).map_or(false, Tile::is_walkable) {
        re_debug!("cannot start a search on {:?}", start);
        return None;
    }
    if objectives.is_empty() {
        re_debug!("no objectives to search for from {:?}", start);
        return None;
    }
    #[cfg(feature = "log")]
    let timer = std::time::Instant::now();

    let size_hint = maze.width() * maze.height();
    let mut tree = SearchTree::with_capacity(size_hint);
    let mut closed = PointSet::with_capacity(size_hint);
    let mut next = BinaryHeap::with_capacity(size_hint / 2);

    let root = tree.add_root(start, heuristic(start, objectives));
    next.push(FrontierElement(root, tree[root].evaluation(), 0));
    let mut inserted = 1;

    while let Some(FrontierElement(current_id, _, _)) = next.pop() {
        let current = &tree[current_id];
        let current_state = current.state;

        if objectives.contains(&current_state) {
            let path = Path::new(tree.actions_to(current_id), current.cost);
            #[cfg(feature = "log")]
            log::debug!(
                "found path from {:?} to {:?} with cost {} ({} expanded, {} created) in {:?}",
                start,
                current_state,
                path.cost,
                closed.len(),
                inserted,
                timer.elapsed()
            );
            return Some(path);
        }

        if !closed.insert(current_state) {
            continue;
        }
        re_trace!(
            "expanding {:?} with f = {}",
            current_state,
            current.evaluation()
        );

        for (action, other_state) in maze.transitions(current_state) {
            if closed.contains(&other_state) {
                continue;
            }
            let other_id = tree.add_child(
                current_id,
                action,
                other_state,
                maze.cost(other_state),
                heuristic(other_state, objectives),
            );
            next.push(FrontierElement(other_id, tree[other_id].evaluation(), inserted));
            inserted += 1;
        }
    }

    #[cfg(feature = "log")]
    log::debug!(
        "no path from {:?} ({} expanded) in {:?}",
        start,
        closed.len(),
        timer.elapsed()
    );
    None
}
