//! Game configuration and its validation.

use meme_train_core::{Direction, GridSize};
use meme_train_system_registry::Roster;
use meme_train_system_train::Train;
use thiserror::Error;

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0x42f0_e1eb_d4a5_3c21;

const DEFAULT_COLUMNS: u32 = 20;
const DEFAULT_ROWS: u32 = 13;

/// Parameters fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Dimensions of the arena.
    pub grid: GridSize,
    /// Categories to collect and the count each must reach.
    pub roster: Roster,
    /// Number of segments the train starts with.
    pub initial_length: usize,
    /// Heading of the train when a run starts.
    pub initial_heading: Direction,
    /// Preferred distance between collectibles and the arena edge.
    pub spawn_margin: u32,
    /// Seed of the generator driving collectible placement.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridSize::new(DEFAULT_COLUMNS, DEFAULT_ROWS),
            roster: Roster::default(),
            initial_length: 1,
            initial_heading: Direction::Down,
            spawn_margin: 0,
            seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    /// Creates the default configuration on a grid of the provided size.
    #[must_use]
    pub fn with_grid(columns: u32, rows: u32) -> Self {
        Self {
            grid: GridSize::new(columns, rows),
            ..Self::default()
        }
    }

    /// Checks that a run can be started with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let columns = self.grid.columns();
        let rows = self.grid.rows();
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { columns, rows });
        }
        if i32::try_from(columns).is_err() || i32::try_from(rows).is_err() {
            return Err(ConfigError::GridTooLarge { columns, rows });
        }
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        if self.initial_length > self.cells_behind_centre() {
            return Err(ConfigError::TrainDoesNotFit {
                length: self.initial_length,
                columns,
                rows,
            });
        }

        Ok(())
    }

    /// Cells from the centre to the edge the body trails toward, centre included.
    fn cells_behind_centre(&self) -> usize {
        let (columns, rows) = (self.grid.columns(), self.grid.rows());
        let (column, row) = (columns / 2, rows / 2);
        let cells = match self.initial_heading.opposite() {
            Direction::Up => row + 1,
            Direction::Down => rows - row,
            Direction::Left => column + 1,
            Direction::Right => columns - column,
        };
        usize::try_from(cells).unwrap_or(usize::MAX)
    }

    /// Train laid out at the arena centre, trailing behind its heading.
    #[must_use]
    pub fn initial_train(&self) -> Train {
        Train::straight(self.grid.center(), self.initial_heading, self.initial_length)
    }
}

/// Reasons a configuration or scenario may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The arena has no cells.
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// The arena cannot be addressed with signed cell coordinates.
    #[error("grid of {columns}x{rows} cells is too large")]
    GridTooLarge {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// The roster lists no categories.
    #[error("roster must contain at least one category")]
    EmptyRoster,
    /// The train would start without segments.
    #[error("initial train length must be at least one")]
    ZeroLength,
    /// The initial train runs off the arena.
    #[error("initial train of length {length} does not fit a {columns}x{rows} grid")]
    TrainDoesNotFit {
        /// Requested train length.
        length: usize,
        /// Column count of the arena.
        columns: u32,
        /// Row count of the arena.
        rows: u32,
    },
    /// A scenario train covers cells outside the arena.
    #[error("scenario train leaves the grid")]
    ScenarioTrainOutOfBounds,
    /// A scenario collectible is off the arena, on the train, or of an unknown category.
    #[error("scenario collectible is not placeable")]
    ScenarioCollectibleInvalid,
    /// Scenario counts do not line up with the roster.
    #[error("scenario tracks {found} categories but the roster has {expected}")]
    ScenarioCountsMismatch {
        /// Number of roster categories.
        expected: usize,
        /// Number of tracked categories supplied.
        found: usize,
    },
}
