#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawning system responsible for placing the next collectible.
//!
//! Randomness is a capability handed in by the caller, so a seeded generator
//! reproduces the exact same placements on replay.

use std::collections::HashSet;

use meme_train_core::{CategoryId, CellCoord, CellRect, Collectible, GridSize};
use meme_train_system_registry::{CollectionCounts, Roster};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

/// Random probes tried before falling back to scanning every free cell.
const REJECTION_ATTEMPTS: usize = 32;

/// Reported when the train covers every cell the spawner may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no free cell remains for a collectible")]
pub struct SpawnExhausted;

/// Configuration parameters for collectible placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    margin: u32,
}

impl Config {
    /// Creates a configuration that keeps collectibles `margin` cells away
    /// from the arena edge whenever the inset region has room.
    #[must_use]
    pub const fn new(margin: u32) -> Self {
        Self { margin }
    }

    /// Preferred distance between collectibles and the arena edge.
    #[must_use]
    pub const fn margin(&self) -> u32 {
        self.margin
    }
}

/// Places a collectible on a cell not covered by `train`.
///
/// The category is drawn uniformly from the categories still short of the
/// roster requirement, or from the whole roster once every category is
/// satisfied. The cell is drawn uniformly from the free cells of the inset
/// region, or of the whole grid when the inset region is full.
pub fn place<R>(
    config: &Config,
    grid: &GridSize,
    train: &[CellCoord],
    roster: &Roster,
    counts: &CollectionCounts,
    rng: &mut R,
) -> Result<Collectible, SpawnExhausted>
where
    R: Rng + ?Sized,
{
    let cell = pick_cell(config, grid, train, rng).ok_or(SpawnExhausted)?;
    let category = pick_category(roster, counts, rng);
    log::debug!(
        "placing category {} at ({}, {})",
        category.get(),
        cell.column(),
        cell.row()
    );
    Ok(Collectible::new(cell, category))
}

fn pick_category<R>(roster: &Roster, counts: &CollectionCounts, rng: &mut R) -> CategoryId
where
    R: Rng + ?Sized,
{
    let mut pool = counts.unsatisfied(roster);
    if pool.is_empty() {
        pool = roster.categories().collect();
    }
    pool.choose(rng).copied().unwrap_or(CategoryId::new(0))
}

fn pick_cell<R>(
    config: &Config,
    grid: &GridSize,
    train: &[CellCoord],
    rng: &mut R,
) -> Option<CellCoord>
where
    R: Rng + ?Sized,
{
    let bounds = grid.bounds();
    if let Some(inset) = grid.inset(config.margin()).filter(|inset| *inset != bounds) {
        if let Some(cell) = sample_free_cell(&inset, train, rng) {
            return Some(cell);
        }
        log::debug!("inset spawn region is full, using the whole grid");
    }
    sample_free_cell(&bounds, train, rng)
}

fn sample_free_cell<R>(region: &CellRect, train: &[CellCoord], rng: &mut R) -> Option<CellCoord>
where
    R: Rng + ?Sized,
{
    let count = region.cell_count();
    if count == 0 {
        return None;
    }

    for _ in 0..REJECTION_ATTEMPTS {
        let cell = region.cell_at(rng.gen_range(0..count))?;
        if !train.contains(&cell) {
            return Some(cell);
        }
    }

    let occupied: HashSet<CellCoord> = train.iter().copied().collect();
    let free: Vec<CellCoord> = region
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();
    free.choose(rng).copied()
}
