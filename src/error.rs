//! Error types for maze generation and solving.

use std::fmt;

use crate::config::MazeConfig;

/// Errors that can occur while generating or solving a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Each side of the grid must hold between 1 and [`MazeConfig::MAX_SIDE`] cells.
    InvalidDimensions { rows: usize, columns: usize },

    /// A wall lookup, neighbor link or predecessor chain broke a structural invariant.
    /// This should not happen for a generated maze and indicates a bug.
    InconsistentTopology(String),

    /// The traversal exhausted its frontier without reaching the exit.
    /// A perfect maze always has a path, so this is also a bug.
    PathNotFound,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, columns } => {
                write!(
                    f,
                    "invalid dimensions: need 1x1 up to {max}x{max} cells, got {}x{}",
                    rows,
                    columns,
                    max = MazeConfig::MAX_SIDE
                )
            }
            MazeError::InconsistentTopology(msg) => {
                write!(f, "inconsistent maze topology: {}", msg)
            }
            MazeError::PathNotFound => write!(f, "no path found from entry to exit"),
        }
    }
}

impl std::error::Error for MazeError {}

/// Errors surfaced by the command line front end.
#[derive(Debug)]
pub enum CliError {
    /// The arguments could not be understood.
    Usage(String),
    Maze(MazeError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Maze(err) => write!(f, "{}", err),
            CliError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Maze(err) => Some(err),
            CliError::Io(err) => Some(err),
        }
    }
}

impl From<MazeError> for CliError {
    fn from(err: MazeError) -> Self {
        CliError::Maze(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}
