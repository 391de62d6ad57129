//! End-of-run report printed by the command-line shell.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use meme_train_core::{GameOutcome, GamePhase};
use meme_train_world::{query, GameState};
use serde::Serialize;

/// Snapshot of a finished or interrupted run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    length: usize,
    ticks: u64,
    required: u32,
    counts: Vec<TeamCount>,
}

/// Collection progress of a single team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct TeamCount {
    team: String,
    collected: u32,
}

impl Summary {
    /// Captures the report from the provided state.
    #[must_use]
    pub(crate) fn from_state(state: &GameState) -> Self {
        let roster = query::roster(state);
        let counts = query::counts(state)
            .iter()
            .map(|(category, collected)| TeamCount {
                team: roster.name(category).unwrap_or("?").to_owned(),
                collected,
            })
            .collect();

        Self {
            phase: query::phase(state),
            outcome: query::outcome(state),
            length: query::train_cells(state).len(),
            ticks: query::tick_index(state),
            required: roster.required(),
            counts,
        }
    }

    /// Human readable multi-line report.
    #[must_use]
    pub(crate) fn to_text(&self) -> String {
        let result = match self.outcome {
            Some(GameOutcome::Won { reason }) => format!("won ({reason:?})"),
            Some(GameOutcome::Lost { collision, at }) => format!(
                "lost ({collision:?} at {}, {})",
                at.column(),
                at.row()
            ),
            None => format!("unfinished ({:?})", self.phase),
        };

        let mut text = format!(
            "result: {result}\nticks: {}\nlength: {}\n",
            self.ticks, self.length
        );
        for entry in &self.counts {
            let _ = writeln!(
                text,
                "  {}: {}/{}",
                entry.team, entry.collected, self.required
            );
        }
        text
    }

    /// Pretty-printed JSON report.
    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialise run summary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_train_world::{new_game, start};

    #[test]
    fn text_lists_every_team() {
        let state = start(&new_game(8, 8).expect("valid grid"));
        let text = Summary::from_state(&state).to_text();

        assert!(text.starts_with("result: unfinished (Playing)"));
        assert!(text.contains("length: 1"));
        assert!(text.contains("  team-1: 0/2"));
        assert!(text.contains("  team-6: 0/2"));
    }

    #[test]
    fn json_carries_phase_and_counts() {
        let state = start(&new_game(1, 1).expect("valid grid"));
        let json = Summary::from_state(&state).to_json().expect("serialisable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["phase"], "Won");
        assert_eq!(value["length"], 1);
        assert_eq!(value["counts"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["counts"][0]["team"], "team-1");
    }
}
