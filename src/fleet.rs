//! A player's five ships: placement legality and coordinate resolution.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET_ORDER, NUM_SHIPS, RANDOM_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Placement, Ship, ShipType};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// One slot per ship type, filled during the placement phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The placed ship of `ship_type`, if any.
    pub fn ship(&self, ship_type: ShipType) -> Option<&Ship> {
        self.ships[ship_type.index()].as_ref()
    }

    /// Placed ships in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// First type in placement order that has no ship yet.
    pub fn next_unplaced(&self) -> Option<ShipType> {
        FLEET_ORDER
            .iter()
            .copied()
            .find(|t| self.ships[t.index()].is_none())
    }

    /// Whether all five ships are placed.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Resolve a cell to the ship occupying it.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipType> {
        self.ships()
            .find(|s| s.contains(coord))
            .map(|s| s.ship_type())
    }

    /// Check that `candidate` is on the board and clear of every placed ship.
    pub fn check_placement(&self, candidate: &Placement) -> Result<(), GameError> {
        for cell in candidate.cells() {
            match cell {
                Some(c) if self.ship_at(c).is_none() => {}
                _ => return Err(GameError::IllegalLocation),
            }
        }
        Ok(())
    }

    /// Validate and add a ship. Nothing changes on error.
    pub fn place(&mut self, placement: Placement) -> Result<&Ship, GameError> {
        let slot = placement.ship_type.index();
        if self.ships[slot].is_some() {
            return Err(GameError::ShipAlreadyPlaced(placement.ship_type));
        }
        self.check_placement(&placement)?;
        let ship = Ship::new(placement)?;
        log::debug!(
            "placed {} at {} facing {:?}",
            placement.ship_type,
            placement.anchor,
            placement.orientation
        );
        Ok(&*self.ships[slot].insert(ship))
    }

    /// Propose a random legal placement for an unplaced `ship_type`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<Placement, GameError> {
        if self.ship(ship_type).is_some() {
            return Err(GameError::ShipAlreadyPlaced(ship_type));
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = match rng.random_range(0..4u8) {
                0 => Orientation::North,
                1 => Orientation::South,
                2 => Orientation::East,
                _ => Orientation::West,
            };
            let x = rng.random_range(1..=BOARD_SIZE);
            let y = rng.random_range(1..=BOARD_SIZE);
            let anchor = Coord::new(x, y)?;
            let candidate = Placement::new(ship_type, anchor, orientation);
            if self.check_placement(&candidate).is_ok() {
                return Ok(candidate);
            }
        }
        Err(GameError::UnableToPlaceShip(ship_type))
    }

    /// Occupancy of all placed ships.
    pub fn occupancy(&self) -> BB {
        self.ships()
            .fold(BB::new(), |acc, s| acc | BB::from_cells(s.cells()))
    }

    /// Number of ships still afloat.
    pub fn remaining(&self) -> usize {
        self.ships().filter(|s| !s.is_sunk()).count()
    }

    /// Whether a complete fleet has every ship sunk.
    pub fn all_sunk(&self) -> bool {
        self.is_complete() && self.ships().all(Ship::is_sunk)
    }

    /// Apply one hit to the ship of `ship_type`. Returns the ship after the hit.
    pub(crate) fn damage(&mut self, ship_type: ShipType) -> Option<&Ship> {
        let ship = self.ships[ship_type.index()].as_mut()?;
        ship.take_hit();
        Some(&*ship)
    }
}
