pub mod frontier;
pub mod search;

use crate::{
    error::MazeError,
    maze::{CellTag, Maze},
};
use frontier::{Queue, Stack};
use search::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "d" => Ok(Solver::Dfs),
            "bfs" | "b" => Ok(Solver::Bfs),
            other => Err(format!("unknown solver '{}', expected bfs or dfs", other)),
        }
    }
}

/// Find the path from the maze's entry to its exit and tag it.
///
/// Returns the cell indices from entry to exit, both included. Cells on the
/// path that carry no other tag are tagged [`CellTag::Route`]; the route of a
/// previous solve is cleared first, so solving again yields the same tags.
pub fn solve_maze(maze: &mut Maze, solver: Solver) -> Result<Vec<usize>, MazeError> {
    let (entry, exit) = (maze.entry(), maze.exit());
    let path = match solver {
        Solver::Dfs => search(maze.cells(), entry, exit, Stack::default()),
        Solver::Bfs => search(maze.cells(), entry, exit, Queue::default()),
    }?;

    let cells = maze.cells_mut();
    for cell in cells.iter_mut().filter(|c| c.tag == CellTag::Route) {
        cell.tag = CellTag::Empty;
    }
    for &index in &path {
        if cells[index].tag == CellTag::Empty {
            cells[index].tag = CellTag::Route;
        }
    }

    tracing::info!("[solve] {} found a path of {} cells", solver, path.len());
    maze.set_route(path.clone());
    Ok(path)
}
