use meme_train_core::{
    CategoryId, CellCoord, Collectible, Direction, FatalCollision, GridSize, MoveOutcome,
};
use meme_train_system_collision::classify;
use meme_train_system_train::{next_head, Train};

fn square_loop() -> Train {
    Train::from_cells(vec![
        CellCoord::new(1, 0),
        CellCoord::new(1, 1),
        CellCoord::new(0, 1),
        CellCoord::new(0, 0),
    ])
    .expect("square loop")
}

#[test]
fn leaving_left_edge_hits_wall() {
    let grid = GridSize::new(5, 5);
    let train = Train::straight(CellCoord::new(0, 2), Direction::Left, 2);
    let head = next_head(train.head(), Direction::Left);

    assert_eq!(
        classify(&grid, &train, head, None),
        MoveOutcome::Fatal(FatalCollision::Wall)
    );
}

#[test]
fn leaving_far_edges_hits_wall() {
    let grid = GridSize::new(3, 2);
    let train = Train::new(CellCoord::new(2, 1));

    for direction in [Direction::Right, Direction::Down] {
        let head = next_head(train.head(), direction);
        assert_eq!(
            classify(&grid, &train, head, None),
            MoveOutcome::Fatal(FatalCollision::Wall),
            "{direction:?} should leave the grid"
        );
    }
}

#[test]
fn entering_the_vacating_tail_is_safe() {
    let grid = GridSize::new(4, 4);
    let train = square_loop();
    let head = next_head(train.head(), Direction::Left);
    assert_eq!(head, train.tail());

    assert_eq!(classify(&grid, &train, head, None), MoveOutcome::Continue);
}

#[test]
fn entering_the_body_is_fatal() {
    let grid = GridSize::new(4, 4);
    let train = Train::from_cells(vec![
        CellCoord::new(1, 0),
        CellCoord::new(1, 1),
        CellCoord::new(0, 1),
        CellCoord::new(0, 0),
        CellCoord::new(0, -1),
    ])
    .expect("hooked train");
    let head = next_head(train.head(), Direction::Down);

    assert_eq!(
        classify(&grid, &train, head, None),
        MoveOutcome::Fatal(FatalCollision::SelfCollision)
    );
}

#[test]
fn tail_blocks_when_the_move_grows_the_train() {
    let grid = GridSize::new(4, 4);
    let train = square_loop();
    let head = next_head(train.head(), Direction::Left);
    let collectible = Collectible::new(head, CategoryId::new(0));

    assert_eq!(
        classify(&grid, &train, head, Some(&collectible)),
        MoveOutcome::Fatal(FatalCollision::SelfCollision)
    );
}

#[test]
fn landing_on_collectible_picks_it_up() {
    let grid = GridSize::new(6, 6);
    let train = Train::straight(CellCoord::new(2, 2), Direction::Right, 2);
    let collectible = Collectible::new(CellCoord::new(3, 2), CategoryId::new(4));

    assert_eq!(
        classify(&grid, &train, CellCoord::new(3, 2), Some(&collectible)),
        MoveOutcome::Pickup(CategoryId::new(4))
    );
    assert_eq!(
        classify(&grid, &train, CellCoord::new(2, 3), Some(&collectible)),
        MoveOutcome::Continue
    );
}

#[test]
fn wall_is_checked_before_collectible() {
    let grid = GridSize::new(2, 2);
    let train = Train::new(CellCoord::new(0, 0));
    let outside = CellCoord::new(-1, 0);
    let collectible = Collectible::new(outside, CategoryId::new(0));

    assert_eq!(
        classify(&grid, &train, outside, Some(&collectible)),
        MoveOutcome::Fatal(FatalCollision::Wall)
    );
}
