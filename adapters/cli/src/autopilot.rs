//! Greedy steering used when no input script is supplied.

use meme_train_core::{Direction, MoveOutcome};
use meme_train_system_collision::classify;
use meme_train_system_train::next_head;
use meme_train_world::{query, GameState};

/// Picks the direction for the next tick.
///
/// Survivable moves are ranked by distance to the active collectible, keeping
/// the current heading on ties. `None` means "keep going", which is also the
/// answer when every move is fatal.
pub(crate) fn choose(state: &GameState) -> Option<Direction> {
    let train = query::train(state);
    let grid = query::grid(state);
    let heading = query::heading(state);
    let collectible = query::active_collectible(state);

    let best = Direction::ALL
        .into_iter()
        .filter(|direction| train.len() < 2 || *direction != heading.opposite())
        .filter_map(|direction| {
            let head = next_head(train.head(), direction);
            match classify(&grid, train, head, collectible.as_ref()) {
                MoveOutcome::Fatal(_) => None,
                MoveOutcome::Pickup(_) => Some((0, direction != heading, direction)),
                MoveOutcome::Continue => {
                    let distance = collectible
                        .map_or(0, |collectible| head.manhattan_distance(collectible.cell));
                    Some((distance, direction != heading, direction))
                }
            }
        })
        .min_by_key(|(distance, turns, _)| (*distance, *turns))
        .map(|(_, _, direction)| direction)?;

    (best != heading).then_some(best)
}
