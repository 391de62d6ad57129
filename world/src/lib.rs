#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state management for Meme Train.
//!
//! [`GameState`] is a plain value. [`apply`] executes a [`Command`] against it
//! and reports [`Event`] values; [`start`] and [`tick`] wrap that entry point
//! as pure functions returning the next state. Shells read the state through
//! the [`query`] module only.

mod cadence;
mod config;

pub use cadence::Cadence;
pub use config::{Config, ConfigError, DEFAULT_SEED};

use meme_train_core::{
    CellCoord, Collectible, Command, Direction, Event, FatalCollision, GameOutcome, GamePhase,
    MoveOutcome, WinReason, WELCOME_BANNER,
};
use meme_train_system_collision::classify;
use meme_train_system_registry::CollectionCounts;
use meme_train_system_spawning::{self as spawning, SpawnExhausted};
use meme_train_system_train::{next_head, steer, Steering, Train};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Represents the authoritative Meme Train game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: Config,
    phase: GamePhase,
    train: Train,
    heading: Direction,
    pending: Option<Direction>,
    collectible: Option<Collectible>,
    counts: CollectionCounts,
    outcome: Option<GameOutcome>,
    tick_index: u64,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates a game waiting in the menu.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            phase: GamePhase::Menu,
            train: config.initial_train(),
            heading: config.initial_heading,
            pending: None,
            collectible: None,
            counts: CollectionCounts::for_roster(&config.roster),
            outcome: None,
            tick_index: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    /// Creates a game already playing from a prepared position.
    ///
    /// A missing collectible is placed as if one had just been picked up,
    /// so the run may already be won when the board has no free cell.
    ///
    /// Useful for puzzles, tutorials and tests that need a specific layout
    /// without steering there tick by tick.
    pub fn from_scenario(config: Config, scenario: Scenario) -> Result<Self, ConfigError> {
        let mut state = Self::new(config)?;
        let grid = state.config.grid;

        if !scenario.train.cells().iter().all(|cell| grid.in_bounds(*cell)) {
            return Err(ConfigError::ScenarioTrainOutOfBounds);
        }
        if let Some(collectible) = scenario.collectible {
            if !grid.in_bounds(collectible.cell)
                || scenario.train.occupies(collectible.cell)
                || !state.config.roster.contains(collectible.category)
            {
                return Err(ConfigError::ScenarioCollectibleInvalid);
            }
        }
        if scenario.counts.len() != state.config.roster.len() {
            return Err(ConfigError::ScenarioCountsMismatch {
                expected: state.config.roster.len(),
                found: scenario.counts.len(),
            });
        }

        state.phase = GamePhase::Playing;
        state.train = scenario.train;
        state.heading = scenario.heading;
        state.collectible = scenario.collectible;
        state.counts = scenario.counts;
        if state.collectible.is_none() && !state.counts.is_complete(&state.config.roster) {
            let mut events = Vec::new();
            state.respawn(&mut events);
        }
        Ok(state)
    }

    fn set_phase(&mut self, to: GamePhase, out_events: &mut Vec<Event>) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::debug!("phase {from:?} -> {to:?}");
        out_events.push(Event::PhaseChanged { from, to });
    }

    fn reset_run(&mut self) {
        self.train = self.config.initial_train();
        self.heading = self.config.initial_heading;
        self.pending = None;
        self.collectible = None;
        self.counts = CollectionCounts::for_roster(&self.config.roster);
        self.outcome = None;
        self.tick_index = 0;
    }

    fn begin_run(&mut self, out_events: &mut Vec<Event>) {
        self.reset_run();
        self.set_phase(GamePhase::Playing, out_events);
        self.respawn(out_events);
    }

    fn respawn(&mut self, out_events: &mut Vec<Event>) {
        let placement = spawning::place(
            &spawning::Config::new(self.config.spawn_margin),
            &self.config.grid,
            self.train.cells(),
            &self.config.roster,
            &self.counts,
            &mut self.rng,
        );

        match placement {
            Ok(collectible) => {
                self.collectible = Some(collectible);
                out_events.push(Event::CollectibleSpawned { collectible });
            }
            Err(SpawnExhausted) => {
                self.collectible = None;
                self.win(WinReason::BoardExhausted, out_events);
            }
        }
    }

    fn win(&mut self, reason: WinReason, out_events: &mut Vec<Event>) {
        log::info!(
            "run won after {} ticks with {} segments ({reason:?})",
            self.tick_index,
            self.train.len()
        );
        self.outcome = Some(GameOutcome::Won { reason });
        out_events.push(Event::Won { reason });
        self.set_phase(GamePhase::Won, out_events);
    }

    fn crash(&mut self, collision: FatalCollision, at: CellCoord, out_events: &mut Vec<Event>) {
        log::info!(
            "run lost after {} ticks: {collision:?} at ({}, {})",
            self.tick_index,
            at.column(),
            at.row()
        );
        self.outcome = Some(GameOutcome::Lost { collision, at });
        out_events.push(Event::Crashed { collision, at });
        self.set_phase(GamePhase::Lost, out_events);
    }

    fn step(&mut self, out_events: &mut Vec<Event>) {
        self.tick_index = self.tick_index.saturating_add(1);

        let steering = steer(self.heading, self.pending.take(), self.train.len());
        match steering {
            Steering::Turned(direction) => {
                out_events.push(Event::HeadingChanged { direction });
            }
            Steering::Rejected { requested } => {
                out_events.push(Event::SteerRejected {
                    requested,
                    heading: self.heading,
                });
            }
            Steering::Unchanged => {}
        }
        self.heading = steering.heading(self.heading);

        let head = next_head(self.train.head(), self.heading);
        match classify(
            &self.config.grid,
            &self.train,
            head,
            self.collectible.as_ref(),
        ) {
            MoveOutcome::Fatal(collision) => {
                // The train stays where it was so the crash can be shown.
                self.crash(collision, head, out_events);
                return;
            }
            MoveOutcome::Pickup(category) => {
                self.train = self.train.advance(head, true);
                out_events.push(Event::TrainAdvanced {
                    head,
                    vacated: None,
                });

                let consumed = self.collectible.take();
                let recorded = self.counts.record(category);
                if let (Some(collectible), Some(count)) = (consumed, recorded) {
                    out_events.push(Event::CollectiblePicked { collectible, count });
                }

                if !self.counts.is_complete(&self.config.roster) {
                    self.respawn(out_events);
                }
            }
            MoveOutcome::Continue => {
                let vacated = self.train.tail();
                self.train = self.train.advance(head, false);
                out_events.push(Event::TrainAdvanced {
                    head,
                    vacated: Some(vacated),
                });
            }
        }

        if self.phase == GamePhase::Playing && self.counts.is_complete(&self.config.roster) {
            self.win(WinReason::AllCategoriesCollected, out_events);
        }
    }
}

/// Prepared mid-run position used by [`GameState::from_scenario`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Train on the grid.
    pub train: Train,
    /// Heading the train travels in.
    pub heading: Direction,
    /// Active collectible, if any.
    pub collectible: Option<Collectible>,
    /// Counts collected so far, in roster order.
    pub counts: CollectionCounts,
}

/// Creates a game in the menu on a grid of the provided size, using the
/// default roster and seed.
pub fn new_game(columns: u32, rows: u32) -> Result<GameState, ConfigError> {
    GameState::new(Config::with_grid(columns, rows))
}

/// Returns the state after starting a run. Outside the menu nothing changes.
#[must_use]
pub fn start(state: &GameState) -> GameState {
    let mut next = state.clone();
    let mut events = Vec::new();
    apply(&mut next, Command::Start, &mut events);
    next
}

/// Returns the state after one simulation step with optional steering input.
#[must_use]
pub fn tick(state: &GameState, direction: Option<Direction>) -> GameState {
    tick_with_events(state, direction).0
}

/// Like [`tick`], also returning the events produced by the step.
#[must_use]
pub fn tick_with_events(
    state: &GameState,
    direction: Option<Direction>,
) -> (GameState, Vec<Event>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    if let Some(direction) = direction {
        apply(&mut next, Command::Steer { direction }, &mut events);
    }
    apply(&mut next, Command::Tick, &mut events);
    (next, events)
}

/// Applies the provided command to the game, mutating state deterministically.
///
/// Commands that make no sense in the current phase are ignored.
pub fn apply(state: &mut GameState, command: Command, out_events: &mut Vec<Event>) {
    match (command, state.phase) {
        (Command::Start, GamePhase::Menu) => state.begin_run(out_events),
        (Command::Steer { direction }, GamePhase::Playing) => state.pending = Some(direction),
        (Command::Tick, GamePhase::Playing) => state.step(out_events),
        (Command::ReturnToMenu, phase) if phase != GamePhase::Menu => {
            state.reset_run();
            state.set_phase(GamePhase::Menu, out_events);
        }
        (command, phase) => log::debug!("ignoring {command:?} during {phase:?}"),
    }
}

/// Query functions that provide read-only access to the game state.
pub mod query {
    use super::GameState;
    use meme_train_core::{CellCoord, Collectible, Direction, GameOutcome, GamePhase, GridSize};
    use meme_train_system_registry::{CollectionCounts, Roster};
    use meme_train_system_train::Train;

    /// Retrieves the welcome banner that shells may display to players.
    #[must_use]
    pub fn welcome_banner(_state: &GameState) -> &'static str {
        super::WELCOME_BANNER
    }

    /// Current phase of the game.
    #[must_use]
    pub fn phase(state: &GameState) -> GamePhase {
        state.phase
    }

    /// Cells covered by the train, head first.
    #[must_use]
    pub fn train_cells(state: &GameState) -> &[CellCoord] {
        state.train.cells()
    }

    /// Provides read-only access to the train.
    #[must_use]
    pub fn train(state: &GameState) -> &Train {
        &state.train
    }

    /// Collectible currently on the grid, absent outside a live run.
    #[must_use]
    pub fn active_collectible(state: &GameState) -> Option<Collectible> {
        state.collectible
    }

    /// Per-category collection counts of the current run.
    #[must_use]
    pub fn counts(state: &GameState) -> &CollectionCounts {
        &state.counts
    }

    /// Heading the train moved in on the last tick.
    #[must_use]
    pub fn heading(state: &GameState) -> Direction {
        state.heading
    }

    /// Roster of categories for the game.
    #[must_use]
    pub fn roster(state: &GameState) -> &Roster {
        &state.config.roster
    }

    /// Dimensions of the arena.
    #[must_use]
    pub fn grid(state: &GameState) -> GridSize {
        state.config.grid
    }

    /// Number of ticks simulated in the current run.
    #[must_use]
    pub fn tick_index(state: &GameState) -> u64 {
        state.tick_index
    }

    /// How the run ended, once it has.
    #[must_use]
    pub fn outcome(state: &GameState) -> Option<GameOutcome> {
        state.outcome
    }
}
