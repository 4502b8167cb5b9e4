//! Common types for the rule engine: errors and fire results.

use crate::ship::ShipType;

/// Result of a resolved fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// No ship occupies the target cell.
    Miss,
    /// The target cell belongs to the opponent's ship of this type.
    Hit(ShipType),
}

impl FireOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, FireOutcome::Hit(_))
    }
}

/// Errors returned by placement and fire operations.
///
/// Every variant is recoverable: the caller re-prompts and nothing has been
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside `[1, 10] x [1, 10]`.
    OutOfBounds { x: u8, y: u8 },
    /// Ship placement leaves the board or overlaps another ship.
    IllegalLocation,
    /// The target cell already holds an attack result.
    AlreadyAttacked,
    /// The fleet already holds a ship of this type.
    ShipAlreadyPlaced(ShipType),
    /// Action is not allowed in the current match state.
    WrongPhase,
    /// Random placement could not find a free spot.
    UnableToPlaceShip(ShipType),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            GameError::IllegalLocation => write!(f, "You cannot put a ship there"),
            GameError::AlreadyAttacked => write!(f, "You already attacked there"),
            GameError::ShipAlreadyPlaced(t) => write!(f, "{} is already placed", t),
            GameError::WrongPhase => write!(f, "That action is not allowed right now"),
            GameError::UnableToPlaceShip(t) => write!(f, "Unable to find a place for {}", t),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
