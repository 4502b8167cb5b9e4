use battleship_hotseat::{
    Coord, Fleet, FireOutcome, GameError, Match, MatchState, Orientation, Placement, Seat,
    ShipStatus, ShipType, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_fleet(rng: &mut SmallRng) -> Fleet {
    let mut fleet = Fleet::new();
    while let Some(t) = fleet.next_unplaced() {
        let p = fleet.random_placement(rng, t).unwrap();
        fleet.place(p).unwrap();
    }
    fleet
}

/// A match with both fleets placed at random.
fn random_match(seed: u64) -> Match {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new("p1", "p2");
    while let MatchState::AwaitingPlacement(seat) = game.state() {
        let t = game.next_ship().unwrap();
        let p = game.player(seat).fleet().random_placement(&mut rng, t).unwrap();
        game.place_ship(p.anchor.x(), p.anchor.y(), p.orientation).unwrap();
    }
    game
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::North),
        Just(Orientation::South),
        Just(Orientation::East),
        Just(Orientation::West),
    ]
}

fn ship_type() -> impl Strategy<Value = ShipType> {
    prop::sample::select(ShipType::ALL.to_vec())
}

fn coord() -> impl Strategy<Value = Coord> {
    (1..=BOARD_SIZE, 1..=BOARD_SIZE).prop_map(|(x, y)| Coord::new(x, y).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every covered cell resolves to its ship and nothing else resolves.
    #[test]
    fn ship_at_matches_placed_intervals(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = random_fleet(&mut rng);
        for c in Coord::all() {
            let owner = fleet.ships().find(|s| s.cells().any(|cell| cell == c));
            prop_assert_eq!(fleet.ship_at(c), owner.map(|s| s.ship_type()));
        }
    }

    /// Placing B after A fails exactly when B leaves the board or the intervals meet.
    #[test]
    fn placement_fails_iff_intervals_intersect(
        a_anchor in coord(), a_dir in orientation(),
        b_anchor in coord(), b_dir in orientation(),
    ) {
        let a = Placement::new(ShipType::Battleship, a_anchor, a_dir);
        let b = Placement::new(ShipType::Destroyer, b_anchor, b_dir);
        prop_assume!(a.in_bounds());

        let mut fleet = Fleet::new();
        fleet.place(a).unwrap();
        let a_cells: Vec<Coord> = a.cells().flatten().collect();
        let intersects = b.cells().flatten().any(|c| a_cells.contains(&c));
        let expected_ok = b.in_bounds() && !intersects;
        prop_assert_eq!(fleet.check_placement(&b).is_ok(), expected_ok);
    }

    /// Hits move a ship through Damaged to Sunk exactly when every cell is hit.
    #[test]
    fn damage_progression(t in ship_type(), anchor in coord(), dir in orientation()) {
        let p = Placement::new(t, anchor, dir);
        prop_assume!(p.in_bounds());
        let mut fleet = Fleet::new();
        fleet.place(p).unwrap();
        let mut board = battleship_hotseat::Board::new();

        let cells: Vec<Coord> = p.cells().flatten().collect();
        for (i, c) in cells.iter().enumerate() {
            let out = battleship_hotseat::fire(&mut board, &mut fleet, c.x(), c.y()).unwrap();
            prop_assert_eq!(out, FireOutcome::Hit(t));
            let status = fleet.ship(t).unwrap().status();
            if i + 1 < cells.len() {
                prop_assert_eq!(status, ShipStatus::Damaged);
            } else {
                prop_assert_eq!(status, ShipStatus::Sunk);
            }
        }
        for c in &cells {
            let err = battleship_hotseat::fire(&mut board, &mut fleet, c.x(), c.y()).unwrap_err();
            prop_assert_eq!(err, GameError::AlreadyAttacked);
            prop_assert_eq!(fleet.ship(t).unwrap().hits(), t.length());
        }
    }

    /// A rejected repeat shot leaves both players untouched and keeps the turn.
    #[test]
    fn repeat_fire_is_idempotent(seed in any::<u64>(), target in coord()) {
        let mut game = random_match(seed);
        game.fire(target.x(), target.y()).unwrap();
        // Player2 shoots somewhere, then Player1 repeats.
        game.fire(target.x(), target.y()).unwrap();
        let p1_board = *game.player(Seat::Player1).board();
        let p2_fleet = game.player(Seat::Player2).fleet().clone();
        let state = game.state();

        prop_assert_eq!(game.fire(target.x(), target.y()).unwrap_err(), GameError::AlreadyAttacked);
        prop_assert_eq!(*game.player(Seat::Player1).board(), p1_board);
        prop_assert_eq!(game.player(Seat::Player2).fleet(), &p2_fleet);
        prop_assert_eq!(game.state(), state);
    }

    /// After N resolved non-winning shots the active player is Player1 iff N is even,
    /// and the winner is declared only once a whole fleet is sunk.
    #[test]
    fn turns_alternate_until_a_win(seed in any::<u64>()) {
        let mut game = random_match(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut resolved = 0usize;

        while !game.is_finished() {
            let expected = if resolved % 2 == 0 { Seat::Player1 } else { Seat::Player2 };
            prop_assert_eq!(game.state(), MatchState::AttackTurn(expected));

            let x = rng.random_range(1..=BOARD_SIZE);
            let y = rng.random_range(1..=BOARD_SIZE);
            match game.fire(x, y) {
                Ok(v) => {
                    let opponent = game.player(v.shooter.other()).fleet();
                    prop_assert_eq!(v.won, opponent.all_sunk());
                    if v.outcome == FireOutcome::Miss {
                        prop_assert!(!v.won);
                    }
                    resolved += 1;
                }
                Err(e) => {
                    prop_assert_eq!(e, GameError::AlreadyAttacked);
                }
            }
        }

        let MatchState::Finished { winner } = game.state() else { unreachable!() };
        prop_assert!(game.player(winner.other()).fleet().all_sunk());
        prop_assert!(!game.player(winner).fleet().all_sunk());
        prop_assert_eq!(game.player(winner).board().hits(), battleship_hotseat::TOTAL_SHIP_CELLS);
    }
}
