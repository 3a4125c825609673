pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_ARMOR: u32 = 0;
/// Largest accepted board edge.
pub const MAX_BOARD_SIZE: usize = 1024;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Hitpoints of a basic ship.
pub const BASIC_SHIP_HP: u32 = 1;

/// Settings needed to start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of the square board.
    pub size: usize,
    /// Armor of the ship; zero selects a basic ship.
    pub armor: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            armor: DEFAULT_ARMOR,
        }
    }
}
