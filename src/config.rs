use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Placement order, also the order ships are scanned during resolution.
pub const FLEET_ORDER: [ShipType; NUM_SHIPS] = [
    ShipType::AircraftCarrier,
    ShipType::Battleship,
    ShipType::Destroyer,
    ShipType::Submarine,
    ShipType::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Maximum number of random proposals tried before giving up on a ship.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;
