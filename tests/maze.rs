use key_maze::prelude::*;
use nanorand::{Rng, WyRand};

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cheapest cost from `start` to any of `objectives`, by exhaustive Dijkstra
fn reference_cost(maze: &Maze, start: Point, objectives: &PointSet) -> Option<Cost> {
    let mut best = HashMap::new();
    let mut next = BinaryHeap::new();
    best.insert(start, 0);
    next.push(Reverse((0, start)));

    while let Some(Reverse((cost, pos))) = next.pop() {
        if objectives.contains(&pos) {
            return Some(cost);
        }
        if best[&pos] < cost {
            continue;
        }
        for action in Action::all() {
            let Some(other) = action.apply(pos, maze.size()) else {
                continue;
            };
            if maze.is_wall(other) {
                continue;
            }
            let other_cost = cost + maze.cost(other);
            if best.get(&other).map_or(true, |&prev| prev > other_cost) {
                best.insert(other, other_cost);
                next.push(Reverse((other_cost, other)));
            }
        }
    }
    None
}

fn random_maze(rng: &mut WyRand) -> Maze {
    let width = rng.generate_range(3_usize..12);
    let height = rng.generate_range(3_usize..12);

    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| match rng.generate_range(0_u32..20) {
                    0..=5 => 'X',
                    6..=8 => 'M',
                    _ => '.',
                })
                .collect()
        })
        .collect();

    let mut free: Vec<Point> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();
    rng.shuffle(&mut free);
    let goal_count = rng.generate_range(1_usize..=3);
    let specials = ['I', 'K'].into_iter().chain(std::iter::repeat('G').take(goal_count));
    for ((x, y), tile) in free.into_iter().zip(specials) {
        grid[y][x] = tile;
    }

    let rows: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
    Maze::new(&rows).unwrap()
}

#[test]
fn shortest_open_path() {
    init_logger();
    let maze = Maze::new(&[
        "XXXXX", //
        "XI..X",
        "X.X.X",
        "X..GX",
        "XXXXX",
    ])
    .unwrap();
    assert_eq!(maze.goals().iter().copied().collect::<Vec<_>>(), vec![(3, 3)]);

    let path = a_star_search(&maze, maze.initial(), maze.goals()).unwrap();

    assert_eq!(path.len(), 4);
    assert_eq!(path.cost, 4);
    assert_eq!(path.tokens().collect::<String>(), "DDRR");
    // reaching the goal is not enough without a key to collect
    assert_eq!(maze.test_solution(&path), (false, 4));
    assert_eq!(solve(&maze), None);
}

#[test]
fn key_before_goal() {
    init_logger();
    let maze = Maze::new(&[
        "XXXXXX", //
        "XIK.GX",
        "X....X",
        "XXXXXX",
    ])
    .unwrap();
    assert_eq!(maze.key(), Some((2, 1)));

    let to_key = a_star_search(&maze, maze.initial(), maze.objectives(false)).unwrap();
    let to_goal = a_star_search(&maze, (2, 1), maze.objectives(true)).unwrap();
    let path = solve(&maze).unwrap();

    assert_eq!(path.len(), to_key.len() + to_goal.len());
    assert_eq!(path.tokens().collect::<String>(), "RRR");

    let replay = maze.replay(&path);
    assert!(replay.valid);
    assert_eq!(replay.cost, 3);
    assert!(replay.key_step.unwrap() < path.len() - 1);
}

#[test]
fn key_forces_detour() {
    init_logger();
    let maze = Maze::new(&[
        "XXXXXXX", //
        "X..K..X",
        "XI...GX",
        "XXXXXXX",
    ])
    .unwrap();

    let direct = a_star_search(&maze, maze.initial(), maze.goals()).unwrap();
    let path = solve(&maze).unwrap();

    assert_eq!(direct.cost, 4);
    assert_eq!(path.cost, 6);
    assert_eq!(maze.test_solution(&path), (true, 6));
    // the direct route never touches the key
    assert_eq!(maze.test_solution(&direct), (false, 4));
}

#[test]
fn enclosed_key() {
    init_logger();
    let maze = Maze::new(&[
        "XXXXXXX", //
        "XI..XXX",
        "X...XKX",
        "X..GXXX",
        "XXXXXXX",
    ])
    .unwrap();

    assert!(a_star_search(&maze, maze.initial(), maze.goals()).is_some());
    assert_eq!(solve(&maze), None);
}

#[test]
fn costly_terrain_detour() {
    init_logger();
    let rows = [
        "XXXXXX", //
        "XIMMGX",
        "X....X",
        "XXXXXX",
    ];

    let maze = Maze::new(&rows).unwrap();
    let path = a_star_search(&maze, maze.initial(), maze.goals()).unwrap();
    assert_eq!(path.tokens().collect::<String>(), "DRRRU");
    assert_eq!(path.cost, 5);

    // without the terrain penalty the direct route wins
    let uniform = Maze::with_config(&rows, MazeConfig::UNIFORM).unwrap();
    let path = a_star_search(&uniform, uniform.initial(), uniform.goals()).unwrap();
    assert_eq!(path.tokens().collect::<String>(), "RRR");
    assert_eq!(path.cost, 3);
}

#[test]
fn start_on_objective() {
    let maze = Maze::new(&["XIGX"]).unwrap();
    let path = a_star_search(&maze, (2, 0), maze.objectives(true)).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.cost, 0);
    assert_eq!(path.to_string(), "Path[Cost = 0]: <empty>");
}

#[test]
fn random_mazes_are_optimal() {
    init_logger();
    let mut rng = WyRand::new_seed(0x6b65795f6d617a65);

    let mut solved = 0;
    for _ in 0..300 {
        let maze = random_maze(&mut rng);
        let key = maze.key().unwrap();

        let to_key = reference_cost(&maze, maze.initial(), maze.objectives(false));
        let to_goal = reference_cost(&maze, key, maze.objectives(true));
        let expected = to_key.zip(to_goal).map(|(a, b)| a + b);

        let leg = a_star_search(&maze, maze.initial(), maze.goals());
        assert_eq!(
            leg.as_ref().map(|p| p.cost),
            reference_cost(&maze, maze.initial(), maze.goals()),
            "{:?}",
            maze
        );

        let path = solve(&maze);
        assert_eq!(path.as_ref().map(|p| p.cost), expected, "{:?}", maze);

        if let Some(path) = path {
            let replay = maze.replay(&path);
            assert!(replay.valid, "{:?} {}", maze, path);
            assert_eq!(replay.cost, path.cost);
            assert!(replay.key_step.is_some());
            solved += 1;
        }
    }
    // make sure the generator is not degenerate
    assert!(solved > 30, "only {} solvable mazes", solved);
}

#[test]
fn batch_matches_single() {
    let mut rng = WyRand::new_seed(7);
    let mazes: Vec<Maze> = (0..50).map(|_| random_maze(&mut rng)).collect();

    let batch = solve_many(&mazes);
    for (maze, path) in mazes.iter().zip(&batch) {
        assert_eq!(&solve(maze), path);
    }

    #[cfg(feature = "parallel")]
    assert_eq!(key_maze::search::solve_many_parallel(&mazes), batch);
}
