//! Automatic shooter used by the simulator.
//!
//! Sweeps the board in random order and finishes off any hit ship.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    common::{GameError, ShotResult},
    game::Game,
};

/// Shooter that visits every cell once in shuffled order and keeps firing
/// at a cell for as long as it reports a hit on a live ship.
pub struct Hunter {
    queue: Vec<(i64, i64)>,
    target: Option<(i64, i64)>,
}

impl Hunter {
    /// Build a shuffled sweep for a `size` x `size` board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let size = size as i64;
        let mut queue: Vec<(i64, i64)> = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .collect();
        queue.shuffle(rng);
        Self {
            queue,
            target: None,
        }
    }

    /// Next coordinate to fire at, or `None` once the sweep is exhausted.
    pub fn select_target(&mut self) -> Option<(i64, i64)> {
        if let Some(t) = self.target {
            return Some(t);
        }
        self.queue.pop()
    }

    /// Inform the hunter of the result of its last shot.
    pub fn handle_shot_result(&mut self, coord: (i64, i64), result: ShotResult) {
        if result.hit && !result.destroyed {
            self.target = Some(coord);
        } else {
            self.target = None;
        }
    }

    /// Fire until the game is over or no targets remain.
    pub fn play(&mut self, game: &mut Game) -> Result<u64, GameError> {
        while !game.is_over() {
            let Some((r, c)) = self.select_target() else {
                break;
            };
            let res = game.take_shot(r, c)?;
            self.handle_shot_result((r, c), res);
        }
        Ok(game.shots())
    }
}

