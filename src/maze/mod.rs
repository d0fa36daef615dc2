pub mod cell;
pub mod lattice;
pub mod topology;

use rand::Rng;

pub use cell::{Cell, CellTag, Direction, Side};
pub use lattice::{Edge, Lattice, Vertex};

use crate::{
    config::MazeConfig,
    error::MazeError,
    generators::{SpanningTree, generate_walls, get_rng},
};
use topology::build_cells;

/// Result of one manual cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A wall or the grid boundary is in the way. Nothing changed.
    Blocked,
    /// The cursor moved to the cell at this index.
    Moved(usize),
    /// The cursor is on the exit. The session is over and further steps do nothing.
    Finished,
}

/// One generated maze together with its manual cursor.
///
/// Everything is rebuilt on [`Maze::reset`]. Afterwards only cell tags, the
/// cursor and the finished flag change.
pub struct Maze {
    rows: usize,
    columns: usize,
    cell_size: usize,
    lattice: Lattice,
    /// Every candidate edge, sorted by weight
    candidates: Vec<Edge>,
    tree: SpanningTree,
    cells: Box<[Cell]>,
    /// Cells of the last solved path, entry to exit
    route: Vec<usize>,
    /// Index of the cell the manual cursor is on
    cursor: usize,
    finished: bool,
}

impl Maze {
    /// Generates a maze from `config`, seeding the random source if a seed is set.
    pub fn generate(config: &MazeConfig) -> Result<Self, MazeError> {
        let mut rng = get_rng(config.seed);
        Self::generate_with_rng(config.rows, config.columns, config.cell_size, &mut rng)
    }

    /// Generates a `rows` x `columns` maze drawing every random weight from `rng`.
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is 0 or
    /// larger than [`MazeConfig::MAX_SIDE`].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        cell_size: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        MazeConfig::check_dimensions(rows, columns)?;

        let lattice = Lattice::new(rows, columns);
        let (candidates, tree) = generate_walls(&lattice, rng)?;
        let cells = build_cells(rows, columns, &tree)?.into_boxed_slice();
        tracing::info!(
            "[generate] {}x{} maze with {} walls",
            rows,
            columns,
            tree.wall_count()
        );

        let exit = cells.len() - 1;
        Ok(Maze {
            rows,
            columns,
            cell_size,
            lattice,
            candidates,
            tree,
            cells,
            route: Vec::new(),
            cursor: 0,
            finished: exit == 0,
        })
    }

    /// Throws away the current maze and generates a new one with the same dimensions.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MazeError> {
        *self = Self::generate_with_rng(self.rows, self.columns, self.cell_size, rng)?;
        Ok(())
    }

    /// Number of cells along the x axis.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells along the y axis.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Pixel size of the board, with a one cell margin on every side.
    pub fn board_size(&self) -> (usize, usize) {
        (
            (self.rows + 2) * self.cell_size,
            (self.columns + 2) * self.cell_size,
        )
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.lattice.vertices()
    }

    pub fn candidate_edges(&self) -> &[Edge] {
        &self.candidates
    }

    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The path found by the last solve, empty until the maze is solved.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    pub(crate) fn set_route(&mut self, route: Vec<usize>) {
        self.route = route;
    }

    /// Index of cell `(i, j)` in [`Maze::cells`], if it is on the grid.
    pub fn cell_index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.rows && j < self.columns).then_some(i * self.columns + j)
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        self.cell_index(i, j).map(|index| &self.cells[index])
    }

    /// Index of the entry cell `(0, 0)`.
    pub fn entry(&self) -> usize {
        0
    }

    /// Index of the exit cell `(rows - 1, columns - 1)`.
    pub fn exit(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the manual cursor has reached the exit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether `a` and `b` are neighbors with no wall between them.
    pub fn is_passage(&self, a: usize, b: usize) -> bool {
        self.cells
            .get(a)
            .is_some_and(|cell| cell.open_neighbors().any(|n| n == b))
    }

    /// Moves the manual cursor one step if the side it crosses is open.
    /// The vacated cell is tagged [`CellTag::Visited`] and the new one [`CellTag::Cursor`].
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if self.finished {
            return StepOutcome::Finished;
        }

        let Some(next) = self.cells[self.cursor].passage(direction.side()) else {
            tracing::debug!(
                "[cursor] {:?} from {:?} is blocked",
                direction,
                self.cells[self.cursor].coord()
            );
            return StepOutcome::Blocked;
        };

        self.cells[self.cursor].tag = CellTag::Visited;
        self.cells[next].tag = CellTag::Cursor;
        self.cursor = next;
        tracing::debug!("[cursor] moved to {:?}", self.cells[next].coord());

        if next == self.exit() {
            self.finished = true;
            tracing::info!("[cursor] exit reached");
            return StepOutcome::Finished;
        }
        StepOutcome::Moved(next)
    }
}
