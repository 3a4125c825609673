use log::{debug, info};

use crate::{
    board::{Board, Cell},
    common::{GameError, ShotResult},
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Over,
}

/// Core game logic holding the board, the ship and the shot history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ship: Ship,
    over: bool,
    shots: u64,
}

impl Game {
    /// Start a game on a `size` x `size` board with an already placed ship.
    pub fn new(size: usize, ship: Ship) -> Self {
        Self {
            board: Board::new(size),
            ship,
            over: false,
            shots: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Number of accepted shots so far.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else {
            GameStatus::Active
        }
    }

    /// Fire at (row, col).
    ///
    /// Rejected shots (game over, off the board) leave all state untouched.
    /// Accepted shots always count, hit or miss. A miss only marks a cell
    /// that has no marker yet; repeated shots never overwrite a marker.
    pub fn take_shot(&mut self, row: i64, col: i64) -> Result<ShotResult, GameError> {
        if self.over {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.board.in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        // in_bounds guarantees both are non-negative
        let (r, c) = (row as usize, col as usize);
        self.shots += 1;

        if (r, c) == self.ship.position() && self.ship.alive() {
            if self.ship.take_hit() {
                self.board.set(r, c, Cell::Destroyed);
                self.over = true;
                info!("ship destroyed at ({}, {}) after {} shots", r, c, self.shots);
                return Ok(ShotResult {
                    hit: true,
                    destroyed: true,
                });
            }
            self.board.set(r, c, Cell::Hit);
            debug!("hit at ({}, {}), {} hp left", r, c, self.ship.hitpoints());
            return Ok(ShotResult {
                hit: true,
                destroyed: false,
            });
        }

        if self.board.cell(row, col) == Some(Cell::Empty) {
            self.board.set(r, c, Cell::Miss);
        }
        debug!("miss at ({}, {})", r, c);
        Ok(ShotResult::MISS)
    }
}
