//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackCell, Coord, FireOutcome, GameError, Match, MatchState, Orientation, Seat, ShipStatus,
    ShipType, Volley,
};

#[cfg(feature = "std")]
pub use crate::cli::{Console, Settings};
