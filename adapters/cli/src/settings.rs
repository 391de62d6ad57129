//! Optional TOML game description layered beneath command-line flags.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use meme_train_core::{Difficulty, Direction, GridSize};
use meme_train_system_registry::{Roster, DEFAULT_CATEGORY_COUNT, DEFAULT_REQUIRED_COUNT};
use meme_train_world::Config;
use serde::Deserialize;

/// Game settings as written in a TOML file. Absent keys keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GameFile {
    pub(crate) columns: Option<u32>,
    pub(crate) rows: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) initial_length: Option<usize>,
    pub(crate) initial_heading: Option<Direction>,
    pub(crate) spawn_margin: Option<u32>,
    pub(crate) required: Option<u32>,
    pub(crate) teams: Option<Vec<String>>,
}

impl GameFile {
    /// Reads and parses the file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read game config at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to load game config from {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse game config toml contents")
    }

    /// Builds a validated world configuration and the pacing difficulty.
    pub(crate) fn resolve(self) -> Result<(Config, Difficulty)> {
        let defaults = Config::default();
        let required = self.required.unwrap_or(DEFAULT_REQUIRED_COUNT);
        let roster = match self.teams {
            Some(teams) => Roster::new(teams, required),
            None => Roster::numbered(DEFAULT_CATEGORY_COUNT, required),
        }
        .context("invalid team roster")?;

        let config = Config {
            grid: GridSize::new(
                self.columns.unwrap_or(defaults.grid.columns()),
                self.rows.unwrap_or(defaults.grid.rows()),
            ),
            roster,
            initial_length: self.initial_length.unwrap_or(defaults.initial_length),
            initial_heading: self.initial_heading.unwrap_or(defaults.initial_heading),
            spawn_margin: self.spawn_margin.unwrap_or(defaults.spawn_margin),
            seed: self.seed.unwrap_or(defaults.seed),
        };
        config.validate().context("invalid game configuration")?;

        Ok((config, self.difficulty.unwrap_or_default()))
    }
}
