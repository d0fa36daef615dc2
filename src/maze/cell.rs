use crossterm::style::{Color, Stylize};

use std::fmt;

use crate::maze::lattice::Edge;

/// Presentation and bookkeeping tag of a cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTag {
    /// A cell not reached by the cursor or a solution.
    #[default]
    Empty,
    /// The entry cell of the maze.
    Start,
    /// The exit cell of the maze.
    Goal,
    /// The manual cursor's current cell.
    Cursor,
    /// A cell the manual cursor has left behind.
    Visited,
    /// A cell on the solution path.
    Route,
}

impl CellTag {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            CellTag::Empty => "  ".with(Color::Reset),
            CellTag::Start => "🟩".with(Color::Green),
            CellTag::Goal => "🟪".with(Color::Magenta),
            CellTag::Cursor => "🟥".with(Color::Red),
            CellTag::Visited => "🟨".with(Color::Yellow),
            CellTag::Route => "* ".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellTag::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    fn slot(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }
}

/// A cardinal step of the manual cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The side of the current cell the step crosses.
    pub fn side(self) -> Side {
        match self {
            Direction::Up => Side::Top,
            Direction::Down => Side::Bottom,
            Direction::Left => Side::Left,
            Direction::Right => Side::Right,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// One grid square. Neighbors are indices into the maze's cell list.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    i: usize,
    j: usize,
    pub tag: CellTag,
    neighbors: [Option<usize>; 4],
    walls: [Option<Edge>; 4],
}

impl Cell {
    pub fn new(i: usize, j: usize, tag: CellTag) -> Self {
        Cell {
            i,
            j,
            tag,
            neighbors: [None; 4],
            walls: [None; 4],
        }
    }

    /// Grid coordinates `(i, j)`: `i` along the x axis, `j` along the y axis.
    pub fn coord(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    pub fn neighbor(&self, side: Side) -> Option<usize> {
        self.neighbors[side.slot()]
    }

    pub fn set_neighbor(&mut self, side: Side, index: Option<usize>) {
        self.neighbors[side.slot()] = index;
    }

    /// The wall segment on `side`, if that side is walled.
    pub fn wall(&self, side: Side) -> Option<&Edge> {
        self.walls[side.slot()].as_ref()
    }

    pub fn set_wall(&mut self, side: Side, edge: Option<Edge>) {
        self.walls[side.slot()] = edge;
    }

    /// The neighbor across `side`, if there is one and no wall is in the way.
    pub fn passage(&self, side: Side) -> Option<usize> {
        match self.wall(side) {
            Some(_) => None,
            None => self.neighbor(side),
        }
    }

    /// Reachable neighbors, in the order top, left, right, bottom.
    pub fn open_neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        [Side::Top, Side::Left, Side::Right, Side::Bottom]
            .into_iter()
            .filter_map(|side| self.passage(side))
    }
}
