//! Random ship placement, kept outside the deterministic core.

use alloc::format;
use rand::Rng;

use crate::{
    common::GameError,
    config::{GameConfig, MAX_BOARD_SIZE},
    game::Game,
    ship::Ship,
};

/// Reject sizes outside `1..=MAX_BOARD_SIZE` or whose cell count overflows.
pub fn check_size(size: usize) -> Result<usize, GameError> {
    match size.checked_mul(size) {
        Some(area) if (1..=MAX_BOARD_SIZE).contains(&size) => Ok(area),
        _ => Err(GameError::MalformedInput(format!(
            "board size must be between 1 and {}",
            MAX_BOARD_SIZE
        ))),
    }
}

/// Place a ship uniformly at random on a `size` x `size` board.
/// Positive `armor` gives an armored ship, zero a basic one.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, armor: u32) -> Result<Ship, GameError> {
    check_size(size)?;
    let row = rng.random_range(0..size);
    let col = rng.random_range(0..size);
    if armor > 0 {
        Ok(Ship::armored(row, col, armor))
    } else {
        Ok(Ship::basic(row, col))
    }
}

/// Build a fresh game from `config` with a randomly placed ship.
pub fn new_game<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Game, GameError> {
    let ship = random_ship(rng, config.size, config.armor)?;
    log::debug!("placed {:?} on a {}x{} board", ship, config.size, config.size);
    Ok(Game::new(config.size, ship))
}
