#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision detector that classifies a candidate head position.

use meme_train_core::{CellCoord, Collectible, FatalCollision, GridSize, MoveOutcome};
use meme_train_system_train::Train;

/// Classifies moving the head of `train` to `new_head`.
///
/// Checks run in a fixed order and the fatal ones short-circuit:
///
/// 1. a head outside the grid hits the wall;
/// 2. a head on a train cell hits the train, except for the tail cell on a
///    move that does not grow the train, since the tail vacates it this tick;
/// 3. a head on the active collectible picks it up;
/// 4. anything else continues.
#[must_use]
pub fn classify(
    grid: &GridSize,
    train: &Train,
    new_head: CellCoord,
    collectible: Option<&Collectible>,
) -> MoveOutcome {
    if !grid.in_bounds(new_head) {
        return MoveOutcome::Fatal(FatalCollision::Wall);
    }

    let pickup = collectible.filter(|collectible| collectible.cell == new_head);
    if blocking_cells(train, pickup.is_some()).contains(&new_head) {
        return MoveOutcome::Fatal(FatalCollision::SelfCollision);
    }

    match pickup {
        Some(collectible) => MoveOutcome::Pickup(collectible.category),
        None => MoveOutcome::Continue,
    }
}

/// Train cells that remain occupied while the head moves.
fn blocking_cells(train: &Train, grows: bool) -> &[CellCoord] {
    let cells = train.cells();
    if grows {
        cells
    } else {
        &cells[..cells.len() - 1]
    }
}
