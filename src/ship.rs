//! The hidden ship: a fixed position and a hitpoint counter.

use core::fmt;

use crate::config::BASIC_SHIP_HP;

/// Kind of ship, decided at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    /// Sinks on the first hit.
    Basic,
    /// Needs one hit per point of armor.
    Armored,
}

/// A single-cell ship placed at (`row`, `col`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    row: usize,
    col: usize,
    hp: u32,
}

impl Ship {
    /// Ship that goes down after one hit.
    pub const fn basic(row: usize, col: usize) -> Self {
        Self {
            kind: ShipKind::Basic,
            row,
            col,
            hp: BASIC_SHIP_HP,
        }
    }

    /// Ship that takes `armor` hits to destroy. Zero armor yields a ship that
    /// is already dead.
    pub const fn armored(row: usize, col: usize, armor: u32) -> Self {
        Self {
            kind: ShipKind::Armored,
            row,
            col,
            hp: armor,
        }
    }

    /// Origin of the ship (row, col).
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Remaining hitpoints.
    pub fn hitpoints(&self) -> u32 {
        self.hp
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply one hit. Returns `true` once the ship has no hitpoints left,
    /// including when it was already destroyed before this call.
    pub fn take_hit(&mut self) -> bool {
        if self.hp == 0 {
            return true;
        }
        self.hp -= 1;
        self.hp == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, origin: ({}, {}), hp: {} }}",
            self.kind, self.row, self.col, self.hp
        )
    }
}
