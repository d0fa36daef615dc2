use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::maze::{CellTag, Maze};

/// One glyph of the rasterized maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RasterCell {
    /// A wall segment or a lattice point.
    Wall,
    /// An open passage between two cells.
    Open,
    /// The inside of a cell.
    Cell(CellTag),
}

impl fmt::Display for RasterCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterCell::Wall => write!(f, "{}", "⬜".with(Color::White)),
            RasterCell::Open => write!(f, "{}", "  ".with(Color::Reset)),
            RasterCell::Cell(tag) => write!(f, "{}", tag),
        }
    }
}

/// The maze drawn on a `(2 * rows + 1) x (2 * columns + 1)` grid of glyphs.
///
/// Cell `(i, j)` lands on `(2i + 1, 2j + 1)` and lattice point `(x, y)` on
/// `(2x, 2y)`. The glyph between two lattice points is a wall iff the tree
/// holds that edge.
pub struct Raster {
    data: Box<[RasterCell]>,
    width: usize,
    height: usize,
}

impl Raster {
    pub fn from_maze(maze: &Maze) -> Self {
        let width = maze.rows() * 2 + 1;
        let height = maze.columns() * 2 + 1;
        let mut raster = Raster {
            data: vec![RasterCell::Open; width * height].into_boxed_slice(),
            width,
            height,
        };

        for v in maze.vertices() {
            raster.set((v.x * 2, v.y * 2), RasterCell::Wall);
        }

        for edge in maze.tree().all_edges() {
            let coord = if edge.is_horizontal() {
                (edge.a.x.min(edge.b.x) * 2 + 1, edge.a.y * 2)
            } else {
                (edge.a.x * 2, edge.a.y.min(edge.b.y) * 2 + 1)
            };
            raster.set(coord, RasterCell::Wall);
        }

        for cell in maze.cells() {
            let (i, j) = cell.coord();
            raster.set((i * 2 + 1, j * 2 + 1), RasterCell::Cell(cell.tag));
        }

        // Connectors follow the solved path, whatever the cursor did to the cell tags since
        for step in maze.route().windows(2) {
            let (ai, aj) = maze.cells()[step[0]].coord();
            let (bi, bj) = maze.cells()[step[1]].coord();
            raster.set((ai + bi + 1, aj + bj + 1), RasterCell::Cell(CellTag::Route));
        }

        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the printed maze in terminal columns.
    pub fn display_width(&self) -> usize {
        self.width * CellTag::CELL_WIDTH as usize
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn set(&mut self, coord: (usize, usize), cell: RasterCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Print the raster row by row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                queue!(out, style::Print(self[(x, y)]))?;
            }
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }
}

impl std::ops::Index<(usize, usize)> for Raster {
    type Output = RasterCell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
