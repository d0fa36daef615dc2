use std::collections::HashSet;

use crate::{
    error::MazeError,
    generators::SpanningTree,
    maze::{
        cell::{Cell, CellTag, Side},
        lattice::{Edge, Vertex},
    },
};

/// The two lattice vertices bounding `side` of cell `(i, j)`.
pub fn side_vertices(i: usize, j: usize, side: Side) -> (Vertex, Vertex) {
    match side {
        Side::Top => (Vertex::new(i, j), Vertex::new(i + 1, j)),
        Side::Left => (Vertex::new(i, j), Vertex::new(i, j + 1)),
        Side::Right => (Vertex::new(i + 1, j), Vertex::new(i + 1, j + 1)),
        Side::Bottom => (Vertex::new(i, j + 1), Vertex::new(i + 1, j + 1)),
    }
}

/// Build the `rows * columns` cells of the maze and link them.
///
/// Cells are laid out with `i` outer and `j` inner, so cell `(i, j)` sits at
/// index `i * columns + j`: the vertical neighbors are `index ± 1` and the
/// horizontal ones `index ± columns`. A side is walled iff `tree` holds the
/// edge between the two vertices bounding it.
pub fn build_cells(
    rows: usize,
    columns: usize,
    tree: &SpanningTree,
) -> Result<Vec<Cell>, MazeError> {
    let total = rows * columns;
    let mut cells = Vec::with_capacity(total);
    for i in 0..rows {
        for j in 0..columns {
            let tag = if i == 0 && j == 0 {
                CellTag::Start
            } else if i == rows - 1 && j == columns - 1 {
                CellTag::Goal
            } else {
                CellTag::Empty
            };
            cells.push(Cell::new(i, j, tag));
        }
    }

    let walls: HashSet<Edge> = tree.all_edges().copied().collect();

    for (index, cell) in cells.iter_mut().enumerate() {
        let (i, j) = cell.coord();
        // Bounds come from grid coordinates so indices never wrap to the next column
        let links = [
            (Side::Left, (i > 0).then(|| index.checked_sub(columns)).flatten()),
            (Side::Right, (i + 1 < rows).then_some(index + columns)),
            (Side::Top, (j > 0).then(|| index.checked_sub(1)).flatten()),
            (Side::Bottom, (j + 1 < columns).then_some(index + 1)),
        ];
        for (side, neighbor) in links {
            if let Some(n) = neighbor {
                if n >= total {
                    return Err(MazeError::InconsistentTopology(format!(
                        "cell ({}, {}) links {:?} to index {} of {}",
                        i, j, side, n, total
                    )));
                }
            }
            cell.set_neighbor(side, neighbor);
        }

        for side in Side::ALL {
            let (a, b) = side_vertices(i, j, side);
            let wall = walls.get(&Edge::new(a, b, 0)).copied();
            cell.set_wall(side, wall);
        }
    }

    Ok(cells)
}
