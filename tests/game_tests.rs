use battleship::{Cell, Game, GameError, GameStatus, Ship, ShotResult};

#[test]
fn test_single_cell_board_destroyed_in_one_shot() {
    let mut game = Game::new(1, Ship::basic(0, 0));
    assert_eq!(game.status(), GameStatus::Active);

    let res = game.take_shot(0, 0).unwrap();
    assert_eq!(res, ShotResult { hit: true, destroyed: true });
    assert_eq!(game.status(), GameStatus::Over);
    assert!(game.is_over());
    assert_eq!(game.board().cell(0, 0), Some(Cell::Destroyed));
    assert_eq!(game.board().render(), "X ");
    assert_eq!(game.shots(), 1);
}

#[test]
fn test_armored_ship_takes_two_shots() {
    let mut game = Game::new(3, Ship::armored(1, 1, 2));

    let first = game.take_shot(1, 1).unwrap();
    assert_eq!(first, ShotResult { hit: true, destroyed: false });
    assert_eq!(game.board().cell(1, 1), Some(Cell::Hit));
    assert!(!game.is_over());

    let second = game.take_shot(1, 1).unwrap();
    assert_eq!(second, ShotResult { hit: true, destroyed: true });
    assert_eq!(game.board().cell(1, 1), Some(Cell::Destroyed));
    assert!(game.is_over());
    assert_eq!(game.shots(), 2);
}

#[test]
fn test_repeated_miss_keeps_marker() {
    let mut game = Game::new(2, Ship::basic(0, 0));

    assert_eq!(game.take_shot(1, 1).unwrap(), ShotResult::MISS);
    assert_eq!(game.board().cell(1, 1), Some(Cell::Miss));

    assert_eq!(game.take_shot(1, 1).unwrap(), ShotResult::MISS);
    assert_eq!(game.board().cell(1, 1), Some(Cell::Miss));
    assert_eq!(game.board().render(), ". . . o ");
    assert_eq!(game.shots(), 2);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new(5, Ship::basic(0, 0));
    let err = game.take_shot(5, 5).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 5, col: 5 });
    assert_eq!(err.to_string(), "out of range");
    assert!(matches!(
        game.take_shot(-1, 0),
        Err(GameError::OutOfBounds { .. })
    ));
    assert_eq!(game.shots(), 0);
}

#[test]
fn test_shot_after_game_over_rejected() {
    let mut game = Game::new(2, Ship::basic(1, 0));
    game.take_shot(1, 0).unwrap();
    let before = game.board().render();

    let err = game.take_shot(0, 0).unwrap_err();
    assert_eq!(err, GameError::GameAlreadyOver);
    assert_eq!(err.to_string(), "game is already over");
    // over takes precedence over bounds
    assert_eq!(game.take_shot(9, 9).unwrap_err(), GameError::GameAlreadyOver);
    assert_eq!(game.shots(), 1);
    assert_eq!(game.board().render(), before);
}

#[test]
fn test_dead_on_arrival_ship_reads_as_miss() {
    let mut game = Game::new(2, Ship::armored(0, 1, 0));
    let res = game.take_shot(0, 1).unwrap();
    assert_eq!(res, ShotResult::MISS);
    assert_eq!(game.board().cell(0, 1), Some(Cell::Miss));
    assert!(!game.is_over());
}

#[test]
fn test_hit_marker_stays_after_nearby_misses() {
    let mut game = Game::new(3, Ship::armored(2, 2, 3));
    game.take_shot(2, 2).unwrap();
    game.take_shot(0, 0).unwrap();
    assert_eq!(game.board().cell(2, 2), Some(Cell::Hit));
    assert_eq!(game.board().cell(0, 0), Some(Cell::Miss));
    assert_eq!(game.ship().hitpoints(), 2);
    assert_eq!(game.board().render(), "o . . . . . . . H ");
}

#[test]
fn test_ship_outside_board_is_never_hit() {
    let mut game = Game::new(2, Ship::basic(7, 7));
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(game.take_shot(r, c).unwrap(), ShotResult::MISS);
        }
    }
    assert!(!game.is_over());
    assert_eq!(game.shots(), 4);
}
