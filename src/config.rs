use crate::error::MazeError;

/// Generation settings for a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of cells along the x axis
    pub rows: usize,
    /// Number of cells along the y axis
    pub columns: usize,
    /// Pixel size of one cell, only used to scale lattice coordinates
    pub cell_size: usize,
    /// Seed for the random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Cell size used for boards too large to fit on screen at the normal size.
    pub const SMALL_CELL_SIZE: usize = 12;
    /// Cell size used for everything else.
    pub const CELL_SIZE: usize = 20;
    /// Largest number of cells along either axis.
    pub const MAX_SIDE: usize = 255;

    /// Creates a config for a `rows` x `columns` grid, picking the cell size from the dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cell_size: Self::cell_size_for(rows, columns),
            seed: None,
        }
    }

    /// Fixes the random seed so that generation is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Big boards get smaller cells so they stay on screen, small boards stay readable.
    pub fn cell_size_for(rows: usize, columns: usize) -> usize {
        if rows > 70 || columns > 40 {
            Self::SMALL_CELL_SIZE
        } else {
            Self::CELL_SIZE
        }
    }

    /// Checks that the grid has between 1 and [`MazeConfig::MAX_SIDE`] cells in each dimension.
    pub fn validate(&self) -> Result<(), MazeError> {
        Self::check_dimensions(self.rows, self.columns)
    }

    pub fn check_dimensions(rows: usize, columns: usize) -> Result<(), MazeError> {
        let sides = 1..=Self::MAX_SIDE;
        if !sides.contains(&rows) || !sides.contains(&columns) {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}
