#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Train entity: the ordered chain of cells steered by the player.
//!
//! Trains are values. [`Train::advance`] returns the next snapshot instead of
//! mutating the current one, so the previous tick's train stays available to
//! collision checks and history without aliasing.

use meme_train_core::{CellCoord, Direction};

/// Ordered chain of occupied cells, head first.
///
/// A train always holds at least one cell; its cells are pairwise distinct
/// and consecutive cells are grid-adjacent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Train {
    cells: Vec<CellCoord>,
}

impl Train {
    /// Creates a single-cell train.
    #[must_use]
    pub fn new(head: CellCoord) -> Self {
        Self { cells: vec![head] }
    }

    /// Creates a straight train of `length` cells whose body trails behind a
    /// head travelling in `heading`. Lengths below one produce a single cell.
    #[must_use]
    pub fn straight(head: CellCoord, heading: Direction, length: usize) -> Self {
        let behind = heading.opposite();
        let mut cells = Vec::with_capacity(length.max(1));
        let mut cell = head;
        cells.push(cell);
        for _ in 1..length {
            cell = cell.neighbor(behind);
            cells.push(cell);
        }
        Self { cells }
    }

    /// Creates a train from explicit cells, head first.
    ///
    /// Returns `None` unless the cells form a well-formed chain.
    #[must_use]
    pub fn from_cells(cells: Vec<CellCoord>) -> Option<Self> {
        let train = Self { cells };
        train.well_formed().then_some(train)
    }

    /// Cell occupied by the head.
    #[must_use]
    pub fn head(&self) -> CellCoord {
        // Non-empty by construction.
        self.cells[0]
    }

    /// Cell occupied by the last segment.
    #[must_use]
    pub fn tail(&self) -> CellCoord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of segments, including the head.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells, head first.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Reports whether any segment occupies the cell.
    #[must_use]
    pub fn occupies(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the train after moving the head to `new_head`.
    ///
    /// The tail is dropped unless `grow` is set, in which case the train is
    /// one segment longer.
    #[must_use]
    pub fn advance(&self, new_head: CellCoord, grow: bool) -> Train {
        let kept = if grow {
            self.cells.len()
        } else {
            self.cells.len() - 1
        };
        let mut cells = Vec::with_capacity(kept + 1);
        cells.push(new_head);
        cells.extend_from_slice(&self.cells[..kept]);
        Train { cells }
    }

    /// Checks that the train is non-empty, self-avoiding and contiguous.
    #[must_use]
    pub fn well_formed(&self) -> bool {
        if self.cells.is_empty() {
            return false;
        }

        let contiguous = self
            .cells
            .windows(2)
            .all(|pair| pair[0].manhattan_distance(pair[1]) == 1);
        if !contiguous {
            return false;
        }

        let mut sorted = self.cells.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len() == self.cells.len()
    }
}

/// Returns the cell one step from `head` in `direction`.
///
/// No bounds are checked; leaving the arena is the collision detector's call.
#[must_use]
pub fn next_head(head: CellCoord, direction: Direction) -> CellCoord {
    head.neighbor(direction)
}

/// Result of applying a buffered steer to the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steering {
    /// No turn was requested, or the request matched the heading.
    Unchanged,
    /// The train turns to the provided heading.
    Turned(Direction),
    /// The request reversed the heading of a multi-segment train.
    Rejected {
        /// Direction that was requested and discarded.
        requested: Direction,
    },
}

impl Steering {
    /// Heading to use for the tick given the heading before steering.
    #[must_use]
    pub const fn heading(self, current: Direction) -> Direction {
        match self {
            Self::Turned(direction) => direction,
            Self::Unchanged | Self::Rejected { .. } => current,
        }
    }
}

/// Applies the reversal guard to a requested heading.
///
/// A train longer than one segment cannot turn straight back, because the
/// head would land on the second segment.
#[must_use]
pub fn steer(heading: Direction, requested: Option<Direction>, length: usize) -> Steering {
    match requested {
        None => Steering::Unchanged,
        Some(direction) if direction == heading => Steering::Unchanged,
        Some(direction) if direction == heading.opposite() && length > 1 => {
            Steering::Rejected {
                requested: direction,
            }
        }
        Some(direction) => Steering::Turned(direction),
    }
}
