#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Meme Train engine.
//!
//! This crate defines the message surface that connects shells, the
//! authoritative game state, and pure systems. Shells submit [`Command`]
//! values describing player intent, the world executes those commands via its
//! `apply` entry point, and then reports [`Event`] values describing what
//! changed. Systems operate on the plain value types defined here and never
//! own game state themselves.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Choo choo... all aboard the meme train.";

/// Top-level phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a run.
    Menu,
    /// A run is in progress and ticks advance the simulation.
    Playing,
    /// The run ended because the completion condition was met.
    Won,
    /// The run ended because the train crashed.
    Lost,
}

impl GamePhase {
    /// Reports whether the phase ends a run until an explicit restart.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Commands that express all permissible game state mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leaves the menu and begins a fresh run.
    Start,
    /// Buffers a heading change for the next tick. The latest steer wins.
    Steer {
        /// Direction requested by the player.
        direction: Direction,
    },
    /// Advances the simulation by exactly one step.
    Tick,
    /// Returns to the menu from any other phase, discarding the current run.
    ReturnToMenu,
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Announces that the game moved between phases.
    PhaseChanged {
        /// Phase that was active before the command.
        from: GamePhase,
        /// Phase that is active after the command.
        to: GamePhase,
    },
    /// Confirms that the train turned at the start of a tick.
    HeadingChanged {
        /// Heading applied for the tick.
        direction: Direction,
    },
    /// Reports that a buffered steer was discarded by the reversal guard.
    SteerRejected {
        /// Direction the player asked for.
        requested: Direction,
        /// Heading that was kept instead.
        heading: Direction,
    },
    /// Confirms that the train moved one cell.
    TrainAdvanced {
        /// Cell occupied by the new head.
        head: CellCoord,
        /// Cell released by the tail, absent when the train grew.
        vacated: Option<CellCoord>,
    },
    /// Confirms that the head consumed the active collectible.
    CollectiblePicked {
        /// Collectible that was consumed.
        collectible: Collectible,
        /// Collection count of the category after the pickup.
        count: u32,
    },
    /// Confirms that a new collectible was placed on the grid.
    CollectibleSpawned {
        /// Collectible that became active.
        collectible: Collectible,
    },
    /// Reports that the attempted move was fatal.
    Crashed {
        /// Kind of collision that ended the run.
        collision: FatalCollision,
        /// Cell the head attempted to enter.
        at: CellCoord,
    },
    /// Reports that the run was won.
    Won {
        /// Condition that completed the run.
        reason: WinReason,
    },
}

/// Cardinal movement directions available to the train.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in a fixed order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Column and row deltas of a single step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
///
/// Coordinates are signed so that a step off the arena edge is still
/// representable; bounds are a property of [`GridSize`], not of the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: i32,
    row: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Cell one step away in the provided direction.
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (column, row) = direction.offset();
        Self {
            column: self.column.saturating_add(column),
            row: self.row.saturating_add(row),
        }
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

/// Axis-aligned rectangle expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    origin: CellCoord,
    size: CellRectSize,
}

impl CellRect {
    /// Constructs a rectangle from an origin cell and size.
    #[must_use]
    pub const fn from_origin_and_size(origin: CellCoord, size: CellRectSize) -> Self {
        Self { origin, size }
    }

    /// Upper-left cell that anchors the rectangle.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// Dimensions of the rectangle measured in whole cells.
    #[must_use]
    pub const fn size(&self) -> CellRectSize {
        self.size
    }

    /// Reports whether the rectangle covers the provided cell.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        let column = i64::from(cell.column()) - i64::from(self.origin.column());
        let row = i64::from(cell.row()) - i64::from(self.origin.row());
        column >= 0
            && row >= 0
            && column < i64::from(self.size.width())
            && row < i64::from(self.size.height())
    }

    /// Number of cells covered by the rectangle.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.size.width()) * u64::from(self.size.height());
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Cell at the provided row-major index, if it lies inside the rectangle.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<CellCoord> {
        let width = usize::try_from(self.size.width()).ok()?;
        if width == 0 || index >= self.cell_count() {
            return None;
        }
        let column = i32::try_from(index % width).ok()?;
        let row = i32::try_from(index / width).ok()?;
        Some(CellCoord::new(
            self.origin.column().checked_add(column)?,
            self.origin.row().checked_add(row)?,
        ))
    }

    /// Iterates over the covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.cell_count()).filter_map(move |index| self.cell_at(index))
    }
}

/// Size of a [`CellRect`] measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRectSize {
    width: u32,
    height: u32,
}

impl CellRectSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width of the rectangle in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Fixed dimensions of the arena.
///
/// All queries are total: any integer pair can be asked about, and cells off
/// the arena are simply out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a grid with the provided number of columns and rows.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the arena.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the arena.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells in the arena.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.bounds().cell_count()
    }

    /// Reports whether the cell lies within the arena.
    #[must_use]
    pub fn in_bounds(&self, cell: CellCoord) -> bool {
        self.bounds().contains(cell)
    }

    /// Reports whether the cell is covered by one of the provided train cells.
    #[must_use]
    pub fn is_occupied(&self, cell: CellCoord, train_cells: &[CellCoord]) -> bool {
        train_cells.contains(&cell)
    }

    /// Rectangle covering the whole arena.
    #[must_use]
    pub const fn bounds(&self) -> CellRect {
        CellRect::from_origin_and_size(
            CellCoord::new(0, 0),
            CellRectSize::new(self.columns, self.rows),
        )
    }

    /// Rectangle that keeps `margin` cells clear of every edge.
    ///
    /// Returns `None` when the margin leaves no cells.
    #[must_use]
    pub fn inset(&self, margin: u32) -> Option<CellRect> {
        let doubled = margin.checked_mul(2)?;
        let width = self.columns.checked_sub(doubled).filter(|width| *width > 0)?;
        let height = self.rows.checked_sub(doubled).filter(|height| *height > 0)?;
        let offset = i32::try_from(margin).ok()?;
        Some(CellRect::from_origin_and_size(
            CellCoord::new(offset, offset),
            CellRectSize::new(width, height),
        ))
    }

    /// Cell in the middle of the arena, rounding toward the origin.
    #[must_use]
    pub fn center(&self) -> CellCoord {
        let column = i32::try_from(self.columns / 2).unwrap_or(i32::MAX);
        let row = i32::try_from(self.rows / 2).unwrap_or(i32::MAX);
        CellCoord::new(column, row)
    }
}

/// Identifier of a collectible category within the active roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Creates a new category identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of the category within the roster.
    #[must_use]
    pub fn index(&self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

/// Pickup item currently present on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collectible {
    /// Cell the collectible occupies.
    pub cell: CellCoord,
    /// Category the collectible counts toward.
    pub category: CategoryId,
}

impl Collectible {
    /// Creates a collectible at the provided cell.
    #[must_use]
    pub const fn new(cell: CellCoord, category: CategoryId) -> Self {
        Self { cell, category }
    }
}

/// Collisions that end a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FatalCollision {
    /// The head left the arena.
    Wall,
    /// The head entered a cell still held by the train.
    SelfCollision,
}

/// Classification of a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The move ends the run.
    Fatal(FatalCollision),
    /// The head consumes the active collectible of the given category.
    Pickup(CategoryId),
    /// The head moves into an empty cell.
    Continue,
}

/// Conditions that complete a run successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Every category reached its required count.
    AllCategoriesCollected,
    /// The train fills the arena so no collectible can be placed.
    BoardExhausted,
}

/// Final result of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The run was won.
    Won {
        /// Condition that completed the run.
        reason: WinReason,
    },
    /// The run was lost.
    Lost {
        /// Collision that ended the run.
        collision: FatalCollision,
        /// Cell the head attempted to enter.
        at: CellCoord,
    },
}

/// Selectable simulation pace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Four ticks per second.
    #[default]
    Easy,
    /// Seven ticks per second.
    Medium,
    /// Nine ticks per second.
    Hard,
}

impl Difficulty {
    /// Number of simulation ticks executed per second of wall time.
    #[must_use]
    pub const fn ticks_per_second(self) -> u32 {
        match self {
            Self::Easy => 4,
            Self::Medium => 7,
            Self::Hard => 9,
        }
    }
}
