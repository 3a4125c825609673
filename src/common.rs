//! Common types for a single-ship game: shot outcomes and game errors.

use alloc::string::String;

/// Outcome of one accepted shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    /// Shot landed on the live ship.
    pub hit: bool,
    /// Shot brought the ship to zero hitpoints.
    pub destroyed: bool,
}

impl ShotResult {
    pub const MISS: ShotResult = ShotResult {
        hit: false,
        destroyed: false,
    };
}

/// Errors returned by game operations and input parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Shot attempted after the ship was destroyed.
    GameAlreadyOver,
    /// Coordinates fall outside the board.
    OutOfBounds { row: i64, col: i64 },
    /// Console or HTTP input could not be turned into coordinates.
    MalformedInput(String),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::GameAlreadyOver => write!(f, "game is already over"),
            GameError::OutOfBounds { .. } => write!(f, "out of range"),
            GameError::MalformedInput(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
