use std::collections::{HashSet, VecDeque};

use spanmaze::{
    Maze, MazeConfig, MazeError, Solver, StepOutcome,
    generators::get_rng,
    maze::{CellTag, Direction, Side},
    solve_maze,
};

fn seeded(rows: usize, columns: usize, seed: u64) -> Maze {
    Maze::generate(&MazeConfig::new(rows, columns).with_seed(seed)).unwrap()
}

/// The direction that crosses from cell `from` into its neighbor `to`.
fn direction_between(maze: &Maze, from: usize, to: usize) -> Direction {
    let cell = &maze.cells()[from];
    [
        (Side::Top, Direction::Up),
        (Side::Bottom, Direction::Down),
        (Side::Left, Direction::Left),
        (Side::Right, Direction::Right),
    ]
    .into_iter()
    .find(|&(side, _)| cell.neighbor(side) == Some(to))
    .map(|(_, direction)| direction)
    .expect("cells are neighbors")
}

#[test]
fn two_by_two_scenario() {
    let mut maze = seeded(2, 2, 5);
    assert_eq!(maze.vertices().len(), 9);
    assert_eq!(maze.candidate_edges().len(), 12);
    assert_eq!(maze.tree().edges().len(), 8);
    assert_eq!(maze.tree().all_edges().count(), 9);

    let path = solve_maze(&mut maze, Solver::Bfs).unwrap();
    // (0,0) and (1,1) are diagonal, so the path always goes through (0,1) or (1,0)
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], 0);
    assert_eq!(path[2], 3);
    assert!(path[1] == 1 || path[1] == 2);
}

#[test]
fn tree_edge_count_for_many_sizes() {
    for (rows, columns) in [(1, 1), (1, 5), (5, 1), (2, 3), (10, 10), (71, 3)] {
        let maze = seeded(rows, columns, 17);
        assert_eq!(maze.tree().edges().len(), (rows + 1) * (columns + 1) - 1);
    }
}

#[test]
fn passages_form_a_spanning_tree_of_cells() {
    let maze = seeded(9, 7, 23);
    let cells = maze.cells();

    let passages: usize = cells.iter().map(|c| c.open_neighbors().count()).sum();
    assert_eq!(passages / 2, cells.len() - 1);

    let mut seen = HashSet::from([maze.entry()]);
    let mut queue = VecDeque::from([maze.entry()]);
    while let Some(index) = queue.pop_front() {
        for n in cells[index].open_neighbors() {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    assert_eq!(seen.len(), cells.len());
}

#[test]
fn bfs_and_dfs_find_the_same_path() {
    for seed in [1, 2, 3, 99] {
        let mut maze = seeded(12, 9, seed);
        let bfs = solve_maze(&mut maze, Solver::Bfs).unwrap();
        let dfs = solve_maze(&mut maze, Solver::Dfs).unwrap();
        assert_eq!(bfs.len(), dfs.len());
        assert_eq!(
            bfs.iter().collect::<HashSet<_>>(),
            dfs.iter().collect::<HashSet<_>>()
        );
        assert!(bfs.windows(2).all(|w| maze.is_passage(w[0], w[1])));
    }
}

#[test]
fn same_seed_same_maze() {
    let a = seeded(8, 5, 1234);
    let b = seeded(8, 5, 1234);
    assert_eq!(a.vertices(), b.vertices());
    assert!(
        a.candidate_edges()
            .iter()
            .zip(b.candidate_edges())
            .all(|(x, y)| x == y && x.weight == y.weight)
    );
    assert_eq!(a.tree(), b.tree());
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn caller_supplied_rng_matches_seeded_config() {
    let from_config = seeded(6, 6, 77);
    let from_rng = Maze::generate_with_rng(6, 6, 20, &mut get_rng(Some(77))).unwrap();
    assert_eq!(from_config.tree(), from_rng.tree());
}

#[test]
fn reset_with_same_seed_restores_the_maze() {
    let mut maze = seeded(5, 5, 3);
    let original = maze.cells().to_vec();
    maze.step(Direction::Down);
    maze.step(Direction::Right);
    maze.reset(&mut get_rng(Some(3))).unwrap();
    assert_eq!(maze.cells(), &original[..]);
}

#[test]
fn entry_is_walled_top_and_left() {
    for seed in 0..10 {
        let maze = seeded(4, 6, seed);
        let entry = &maze.cells()[maze.entry()];
        assert!(entry.wall(Side::Top).is_some());
        assert!(entry.wall(Side::Left).is_some());
        assert_ne!(entry.tag, maze.cells()[maze.exit()].tag);
    }
}

#[test]
fn invalid_dimensions_are_rejected() {
    assert!(matches!(
        Maze::generate(&MazeConfig::new(0, 0)),
        Err(MazeError::InvalidDimensions { rows: 0, columns: 0 })
    ));
}

#[test]
fn cursor_follows_solution_to_exit() {
    let mut maze = seeded(6, 4, 31);
    let path = solve_maze(&mut maze, Solver::Dfs).unwrap();

    for w in path.windows(2) {
        let direction = direction_between(&maze, w[0], w[1]);
        let outcome = maze.step(direction);
        if w[1] == maze.exit() {
            assert_eq!(outcome, StepOutcome::Finished);
        } else {
            assert_eq!(outcome, StepOutcome::Moved(w[1]));
            assert_eq!(maze.cells()[w[0]].tag, CellTag::Visited);
        }
    }

    assert!(maze.is_finished());
    let cursor = maze.cursor();
    assert_eq!(maze.step(Direction::Left), StepOutcome::Finished);
    assert_eq!(maze.cursor(), cursor);
}

#[test]
fn walled_step_leaves_maze_unchanged() {
    let mut maze = seeded(5, 5, 8);
    let entry = maze.entry();
    let walled = [Direction::Down, Direction::Right]
        .into_iter()
        .find(|d| maze.cells()[entry].passage(d.side()).is_none());
    // In a maze bigger than one cell the entry has at most two open sides
    if let Some(direction) = walled {
        let before = maze.cells().to_vec();
        assert_eq!(maze.step(direction), StepOutcome::Blocked);
        assert_eq!(maze.cursor(), entry);
        assert_eq!(maze.cells(), &before[..]);
    }
}

#[test]
fn solving_twice_is_stable() {
    let mut maze = seeded(10, 10, 64);
    let first = solve_maze(&mut maze, Solver::Dfs).unwrap();
    let second = solve_maze(&mut maze, Solver::Dfs).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        maze.tree().edges().len(),
        seeded(10, 10, 64).tree().edges().len()
    );
}
