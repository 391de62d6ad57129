//! Plain-text rendering of a game snapshot.

use std::fmt::Write as _;

use meme_train_core::{CellCoord, GameOutcome};
use meme_train_world::{query, GameState};

const EMPTY: char = '.';
const HEAD: char = '@';
const BODY: char = 'o';
const COLLECTIBLE: char = '*';
const CRASH: char = 'X';

/// Renders the arena as one text line per row, preceded by a status line.
#[must_use]
pub(crate) fn render(state: &GameState) -> String {
    let grid = query::grid(state);
    let width = grid.columns() as usize;
    let mut rows = vec![vec![EMPTY; width]; grid.rows() as usize];
    let mut paint = |cell: CellCoord, glyph: char| {
        if let (Ok(column), Ok(row)) = (usize::try_from(cell.column()), usize::try_from(cell.row()))
        {
            if let Some(slot) = rows.get_mut(row).and_then(|line| line.get_mut(column)) {
                *slot = glyph;
            }
        }
    };

    if let Some(collectible) = query::active_collectible(state) {
        paint(collectible.cell, COLLECTIBLE);
    }
    for (index, cell) in query::train_cells(state).iter().enumerate() {
        paint(*cell, if index == 0 { HEAD } else { BODY });
    }
    if let Some(GameOutcome::Lost { at, .. }) = query::outcome(state) {
        paint(at, CRASH);
    }

    let mut frame = format!(
        "tick {} | {:?} | length {} | collected {}\n",
        query::tick_index(state),
        query::phase(state),
        query::train_cells(state).len(),
        query::counts(state).total()
    );
    for row in rows {
        let line: String = row.into_iter().collect();
        let _ = writeln!(frame, "{line}");
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_train_core::{CategoryId, Collectible, Direction};
    use meme_train_system_registry::CollectionCounts;
    use meme_train_system_train::Train;
    use meme_train_world::{new_game, tick, Config, Scenario};

    #[test]
    fn menu_frame_shows_the_centred_train() {
        let state = new_game(4, 3).expect("valid grid");
        let frame = render(&state);
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("tick 0 | Menu"));
        assert_eq!(lines[1], "....");
        assert_eq!(lines[2], "..@.");
        assert_eq!(lines[3], "....");
    }

    #[test]
    fn self_collision_marks_the_crash_cell() {
        let train = Train::from_cells(vec![
            CellCoord::new(1, 1),
            CellCoord::new(1, 2),
            CellCoord::new(0, 2),
            CellCoord::new(0, 1),
            CellCoord::new(0, 0),
        ])
        .expect("connected train");
        let state = GameState::from_scenario(
            Config::with_grid(3, 3),
            Scenario {
                train,
                heading: Direction::Up,
                collectible: Some(Collectible::new(CellCoord::new(2, 2), CategoryId::new(0))),
                counts: CollectionCounts::from_counts(vec![0; 6]),
            },
        )
        .expect("valid scenario");

        let lost = tick(&state, Some(Direction::Left));
        let frame = render(&lost);
        let lines: Vec<_> = frame.lines().skip(1).collect();

        assert_eq!(lines, vec!["o..", "X@.", "oo*"]);
    }
}
