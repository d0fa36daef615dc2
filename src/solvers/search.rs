use std::collections::{HashMap, HashSet};

use super::frontier::Frontier;
use crate::{error::MazeError, maze::Cell};

/// Search `cells` from `start` to `goal` in the order given by `frontier`.
///
/// A neighbor's predecessor is recorded when it is first discovered, not when
/// it is popped, so the reconstructed path is the tree path between `start`
/// and `goal` whatever the frontier discipline.
/// Returns the path from `start` to `goal`, both included.
pub fn search<F: Frontier<usize>>(
    cells: &[Cell],
    start: usize,
    goal: usize,
    mut frontier: F,
) -> Result<Vec<usize>, MazeError> {
    let mut visited = HashSet::new();
    let mut discovered = HashSet::from([start]);
    let mut came_from: HashMap<usize, usize> = HashMap::new();

    frontier.push(start);
    while let Some(current) = frontier.pop() {
        if current == goal {
            tracing::debug!("[solve] goal reached after visiting {} cells", visited.len());
            return reconstruct(&came_from, start, goal);
        }
        if !visited.insert(current) {
            continue;
        }
        let cell = cells.get(current).ok_or_else(|| {
            MazeError::InconsistentTopology(format!("cell index {} out of range", current))
        })?;
        for neighbor in cell.open_neighbors() {
            if discovered.insert(neighbor) {
                came_from.insert(neighbor, current);
                frontier.push(neighbor);
            }
        }
    }

    tracing::error!(
        "[solve] frontier exhausted after visiting {} cells without reaching the goal",
        visited.len()
    );
    Err(MazeError::PathNotFound)
}

/// Walk the predecessor map back from `goal` to `start`.
/// Returns the path in `start` to `goal` order.
pub fn reconstruct(
    came_from: &HashMap<usize, usize>,
    start: usize,
    goal: usize,
) -> Result<Vec<usize>, MazeError> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        // A chain longer than the map would have to revisit a cell
        if path.len() > came_from.len() + 1 {
            return Err(MazeError::InconsistentTopology(format!(
                "predecessor chain from {} loops",
                goal
            )));
        }
        current = *came_from.get(&current).ok_or_else(|| {
            MazeError::InconsistentTopology(format!("cell {} has no predecessor", current))
        })?;
        path.push(current);
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CellTag, Side};
    use crate::solvers::frontier::{Queue, Stack};
    use std::{cell::RefCell, rc::Rc};

    /// A 1 x `n` corridor with every inner side open.
    fn corridor(n: usize) -> Vec<Cell> {
        (0..n)
            .map(|j| {
                let mut cell = Cell::new(0, j, CellTag::Empty);
                cell.set_neighbor(Side::Top, j.checked_sub(1));
                cell.set_neighbor(Side::Bottom, (j + 1 < n).then_some(j + 1));
                cell
            })
            .collect()
    }

    #[test]
    fn test_corridor_path() {
        let cells = corridor(4);
        assert_eq!(search(&cells, 0, 3, Queue::default()), Ok(vec![0, 1, 2, 3]));
        assert_eq!(search(&cells, 0, 3, Stack::default()), Ok(vec![0, 1, 2, 3]));
        assert_eq!(search(&cells, 3, 1, Queue::default()), Ok(vec![3, 2, 1]));
    }

    /// Records every cell the search pops, in order.
    struct Recording<F> {
        inner: F,
        popped: Rc<RefCell<Vec<usize>>>,
    }

    impl<F: Frontier<usize>> Frontier<usize> for Recording<F> {
        fn push(&mut self, item: usize) {
            self.inner.push(item);
        }

        fn pop(&mut self) -> Option<usize> {
            let item = self.inner.pop();
            self.popped.borrow_mut().extend(item);
            item
        }

        fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }
    }

    fn recorded<F: Frontier<usize>>(cells: &[Cell], inner: F) -> (Vec<usize>, Vec<usize>) {
        let popped = Rc::new(RefCell::new(Vec::new()));
        let frontier = Recording {
            inner,
            popped: Rc::clone(&popped),
        };
        let path = search(cells, 0, 4, frontier).unwrap();
        let popped = popped.borrow().clone();
        (path, popped)
    }

    #[test]
    fn test_frontier_sets_exploration_order() {
        // Cell 0 opens right onto the goal 4 and down into the dead end 1 -> 2 -> 3
        let mut cells = corridor(4);
        cells.push(Cell::new(1, 0, CellTag::Empty));
        cells[0].set_neighbor(Side::Right, Some(4));
        cells[4].set_neighbor(Side::Left, Some(0));

        let (bfs_path, bfs_popped) = recorded(&cells, Queue::default());
        let (dfs_path, dfs_popped) = recorded(&cells, Stack::default());

        assert_eq!(bfs_path, vec![0, 4]);
        assert_eq!(dfs_path, bfs_path);
        // The queue reaches the goal first, the stack exhausts the dead end before
        assert_eq!(bfs_popped, vec![0, 4]);
        assert_eq!(dfs_popped, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_start_is_goal() {
        let cells = corridor(1);
        assert_eq!(search(&cells, 0, 0, Queue::default()), Ok(vec![0]));
    }

    #[test]
    fn test_unreachable_goal() {
        let mut cells = corridor(3);
        cells[1].set_neighbor(Side::Bottom, None);
        cells[2].set_neighbor(Side::Top, None);
        assert_eq!(
            search(&cells, 0, 2, Stack::default()),
            Err(MazeError::PathNotFound)
        );
    }

    #[test]
    fn test_reconstruct() {
        let came_from = HashMap::from([(1, 0), (2, 1), (3, 1)]);
        assert_eq!(reconstruct(&came_from, 0, 2), Ok(vec![0, 1, 2]));
        assert_eq!(reconstruct(&came_from, 0, 0), Ok(vec![0]));
        assert!(matches!(
            reconstruct(&came_from, 0, 5),
            Err(MazeError::InconsistentTopology(_))
        ));
    }

    #[test]
    fn test_reconstruct_detects_loop() {
        let came_from = HashMap::from([(1, 2), (2, 1)]);
        assert!(matches!(
            reconstruct(&came_from, 0, 1),
            Err(MazeError::InconsistentTopology(_))
        ));
    }
}
