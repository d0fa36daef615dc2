pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::{Maze, StepOutcome};
pub use solvers::{Solver, solve_maze};
