use meme_train_core::{Command, Direction, Event, GamePhase};
use meme_train_world::{self as world, query, Config, GameState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SCRIPT_LENGTH: usize = 400;

#[test]
fn deterministic_replay_produces_identical_runs() {
    let script = scripted_commands(0x5eed);
    let first = replay(Config::with_grid(12, 9), &script);
    let second = replay(Config::with_grid(12, 9), &script);

    assert_eq!(first.state, second.state, "replay diverged between runs");
    assert_eq!(first.events, second.events);
    assert!(
        first
            .events
            .iter()
            .any(|event| matches!(event, Event::TrainAdvanced { .. })),
        "script must move the train"
    );
}

#[test]
fn random_play_preserves_train_and_count_invariants() {
    for seed in 0..40_u64 {
        let config = Config {
            seed,
            ..Config::with_grid(7, 6)
        };
        let mut state = GameState::new(config).expect("valid config");
        let mut inputs = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));
        let mut events = Vec::new();
        world::apply(&mut state, Command::Start, &mut events);

        for _ in 0..SCRIPT_LENGTH {
            if query::phase(&state).is_terminal() {
                events.clear();
                world::apply(&mut state, Command::ReturnToMenu, &mut events);
                world::apply(&mut state, Command::Start, &mut events);
                continue;
            }

            let direction = random_direction(&mut inputs);
            let (next, step_events) = world::tick_with_events(&state, direction);
            check_step(&state, &next, &step_events);
            state = next;
        }
    }
}

fn check_step(before: &GameState, after: &GameState, events: &[Event]) {
    let train = query::train(after);
    assert!(train.well_formed(), "train broke apart: {:?}", train.cells());

    let grid = query::grid(after);
    if query::phase(after) == GamePhase::Lost {
        assert_eq!(query::train(after), query::train(before));
    } else {
        assert!(train.cells().iter().all(|cell| grid.in_bounds(*cell)));
    }

    let picked = events
        .iter()
        .filter(|event| matches!(event, Event::CollectiblePicked { .. }))
        .count();
    let grown = query::train_cells(after).len() - query::train_cells(before).len();
    assert_eq!(grown, picked, "length changes only on pickup");

    let gained = query::counts(after).total() - query::counts(before).total();
    assert_eq!(gained, picked as u64, "counts grow by one per pickup");
    for (category, count) in query::counts(before).iter() {
        assert!(query::counts(after).count(category) >= count);
    }

    if let Some(collectible) = query::active_collectible(after) {
        assert!(grid.in_bounds(collectible.cell));
        assert!(!train.occupies(collectible.cell));
        assert!(query::roster(after).contains(collectible.category));
    }
    if query::phase(after) == GamePhase::Playing {
        assert!(query::active_collectible(after).is_some());
    }
}

fn random_direction(rng: &mut ChaCha8Rng) -> Option<Direction> {
    if rng.gen_bool(0.4) {
        None
    } else {
        Some(Direction::ALL[rng.gen_range(0..Direction::ALL.len())])
    }
}

fn scripted_commands(seed: u64) -> Vec<Command> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut commands = vec![Command::Start];
    for _ in 0..SCRIPT_LENGTH {
        if let Some(direction) = random_direction(&mut rng) {
            commands.push(Command::Steer { direction });
        }
        commands.push(Command::Tick);
        if rng.gen_ratio(1, 60) {
            commands.push(Command::ReturnToMenu);
            commands.push(Command::Start);
        }
    }
    commands
}

struct ReplayOutcome {
    state: GameState,
    events: Vec<Event>,
}

fn replay(config: Config, commands: &[Command]) -> ReplayOutcome {
    let mut state = GameState::new(config).expect("valid config");
    let mut events = Vec::new();
    for command in commands {
        world::apply(&mut state, *command, &mut events);
    }
    ReplayOutcome { state, events }
}
