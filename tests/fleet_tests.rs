use battleship_hotseat::{
    Coord, Fleet, GameError, Orientation, Placement, ShipType, FLEET_ORDER, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

fn place(fleet: &mut Fleet, t: ShipType, x: u8, y: u8, o: Orientation) -> Result<(), GameError> {
    fleet.place(Placement::new(t, at(x, y), o)).map(|_| ())
}

#[test]
fn carrier_east_from_origin() -> Result<(), GameError> {
    let mut fleet = Fleet::new();
    place(&mut fleet, ShipType::AircraftCarrier, 1, 1, Orientation::East)?;
    for x in 1..=5 {
        assert_eq!(fleet.ship_at(at(x, 1)), Some(ShipType::AircraftCarrier));
    }
    assert_eq!(fleet.ship_at(at(6, 1)), None);
    assert_eq!(fleet.ship_at(at(1, 2)), None);
    Ok(())
}

#[test]
fn carrier_off_the_east_edge() {
    let fleet = Fleet::new();
    let p = Placement::new(ShipType::AircraftCarrier, at(9, 1), Orientation::East);
    assert_eq!(fleet.check_placement(&p), Err(GameError::IllegalLocation));
}

#[test]
fn destroyer_overlap_then_next_row() -> Result<(), GameError> {
    let mut fleet = Fleet::new();
    place(&mut fleet, ShipType::Battleship, 3, 3, Orientation::East)?;

    let overlapping = Placement::new(ShipType::Destroyer, at(5, 1), Orientation::South);
    assert_eq!(fleet.check_placement(&overlapping), Err(GameError::IllegalLocation));
    assert_eq!(fleet.place(overlapping).unwrap_err(), GameError::IllegalLocation);
    assert!(fleet.ship(ShipType::Destroyer).is_none());

    place(&mut fleet, ShipType::Destroyer, 3, 4, Orientation::East)?;
    assert_eq!(fleet.ship_at(at(5, 4)), Some(ShipType::Destroyer));
    assert_eq!(fleet.ship_at(at(5, 3)), Some(ShipType::Battleship));
    Ok(())
}

#[test]
fn same_type_twice_is_rejected() -> Result<(), GameError> {
    let mut fleet = Fleet::new();
    place(&mut fleet, ShipType::PatrolBoat, 1, 1, Orientation::South)?;
    assert_eq!(
        place(&mut fleet, ShipType::PatrolBoat, 8, 8, Orientation::South),
        Err(GameError::ShipAlreadyPlaced(ShipType::PatrolBoat))
    );
    Ok(())
}

#[test]
fn next_unplaced_follows_fleet_order() -> Result<(), GameError> {
    let mut fleet = Fleet::new();
    assert_eq!(fleet.next_unplaced(), Some(ShipType::AircraftCarrier));
    for (row, t) in FLEET_ORDER.iter().enumerate() {
        assert_eq!(fleet.next_unplaced(), Some(*t));
        place(&mut fleet, *t, 1, row as u8 + 1, Orientation::East)?;
    }
    assert_eq!(fleet.next_unplaced(), None);
    assert!(fleet.is_complete());
    assert_eq!(fleet.occupancy().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(fleet.remaining(), 5);
    assert!(!fleet.all_sunk());
    Ok(())
}

#[test]
fn random_fleet_is_legal() -> Result<(), GameError> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut fleet = Fleet::new();
    while let Some(t) = fleet.next_unplaced() {
        let p = fleet.random_placement(&mut rng, t)?;
        fleet.place(p)?;
    }
    assert!(fleet.is_complete());
    assert_eq!(fleet.occupancy().count_ones(), TOTAL_SHIP_CELLS);
    Ok(())
}

#[test]
fn random_placement_refuses_placed_type() -> Result<(), GameError> {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut fleet = Fleet::new();
    place(&mut fleet, ShipType::Submarine, 2, 2, Orientation::East)?;
    assert_eq!(
        fleet.random_placement(&mut rng, ShipType::Submarine),
        Err(GameError::ShipAlreadyPlaced(ShipType::Submarine))
    );
    Ok(())
}
