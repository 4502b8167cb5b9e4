//! Ship catalog, orientation, and per-ship damage tracking.

use core::fmt;

use crate::common::GameError;
use crate::config::FLEET_ORDER;
use crate::coord::Coord;

/// Kind of ship. Each kind has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipType {
    AircraftCarrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipType {
    /// All ship kinds in placement order.
    pub const ALL: [ShipType; 5] = FLEET_ORDER;

    /// Number of cells the ship covers.
    pub const fn length(self) -> u8 {
        match self {
            ShipType::AircraftCarrier => 5,
            ShipType::Battleship => 4,
            ShipType::Destroyer => 3,
            ShipType::Submarine => 3,
            ShipType::PatrolBoat => 2,
        }
    }

    /// Slot of this kind inside a fleet.
    pub(crate) const fn index(self) -> usize {
        match self {
            ShipType::AircraftCarrier => 0,
            ShipType::Battleship => 1,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 3,
            ShipType::PatrolBoat => 4,
        }
    }

    /// Human readable name, e.g. "aircraft carrier".
    pub fn name(self) -> &'static str {
        match self {
            ShipType::AircraftCarrier => "aircraft carrier",
            ShipType::Battleship => "battleship",
            ShipType::Destroyer => "destroyer",
            ShipType::Submarine => "submarine",
            ShipType::PatrolBoat => "patrol boat",
        }
    }

    /// Single-letter marker used on the ship grid.
    pub fn symbol(self) -> char {
        match self {
            ShipType::AircraftCarrier => 'A',
            ShipType::Battleship => 'B',
            ShipType::Destroyer => 'D',
            ShipType::Submarine => 'S',
            ShipType::PatrolBoat => 'P',
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Unit step (dx, dy) away from the anchor. North is up (decreasing y).
    pub fn step(self) -> (i8, i8) {
        match self {
            Orientation::North => (0, -1),
            Orientation::South => (0, 1),
            Orientation::East => (1, 0),
            Orientation::West => (-1, 0),
        }
    }
}

/// Damage level derived from the hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStatus {
    Operational,
    Damaged,
    Sunk,
}

/// A proposed ship position. Not yet checked against bounds or other ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship_type: ShipType,
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(ship_type: ShipType, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            ship_type,
            anchor,
            orientation,
        }
    }

    /// The interval covered by this placement, anchor first. A cell that would
    /// fall off the board is yielded as `None`.
    pub fn cells(&self) -> impl Iterator<Item = Option<Coord>> {
        let (dx, dy) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.ship_type.length() as i8).map(move |i| anchor.offset(dx * i, dy * i))
    }

    /// Whether the whole interval lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.cells().all(|c| c.is_some())
    }
}

/// A placed ship with its damage counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    anchor: Coord,
    orientation: Orientation,
    hits: u8,
}

impl Ship {
    /// Build a ship from a placement. Fails with `IllegalLocation` if any
    /// cell of the interval is off the board.
    pub fn new(placement: Placement) -> Result<Self, GameError> {
        if !placement.in_bounds() {
            return Err(GameError::IllegalLocation);
        }
        Ok(Ship {
            ship_type: placement.ship_type,
            anchor: placement.anchor,
            orientation: placement.orientation,
            hits: 0,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> u8 {
        self.ship_type.length()
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> u8 {
        self.hits
    }

    pub fn status(&self) -> ShipStatus {
        if self.hits >= self.length() {
            ShipStatus::Sunk
        } else if self.hits > 0 {
            ShipStatus::Damaged
        } else {
            ShipStatus::Operational
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.status() == ShipStatus::Sunk
    }

    /// Whether the ship covers `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        if coord == self.anchor {
            return true;
        }
        let (x, y) = (coord.x(), coord.y());
        let (ax, ay) = (self.anchor.x(), self.anchor.y());
        let reach = self.length() - 1;
        match self.orientation {
            Orientation::North => x == ax && y <= ay && ay - y <= reach,
            Orientation::South => x == ax && y >= ay && y - ay <= reach,
            Orientation::East => y == ay && x >= ax && x - ax <= reach,
            Orientation::West => y == ay && x <= ax && ax - x <= reach,
        }
    }

    /// Cells covered by the ship, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        Placement::new(self.ship_type, self.anchor, self.orientation)
            .cells()
            .flatten()
    }

    /// Record one hit. Never counts past the ship's length.
    pub(crate) fn take_hit(&mut self) {
        if self.hits < self.length() {
            self.hits += 1;
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ type: {:?}, anchor: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type,
            self.anchor.x(),
            self.anchor.y(),
            self.orientation,
            self.hits,
            self.length(),
        )
    }
}
