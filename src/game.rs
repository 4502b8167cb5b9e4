//! Match engine: placement phase, alternating fire, win detection.

use alloc::string::String;

use crate::{
    board::{AttackCell, Board},
    common::{FireOutcome, GameError},
    coord::Coord,
    fleet::Fleet,
    player::Player,
    ship::{Orientation, Placement, Ship, ShipType},
};

/// Resolve a shot at (`x`, `y`).
///
/// Reads `target` to find the ship under the cell, records the result on the
/// firing player's `board` and applies one hit to the struck ship. On error
/// neither argument is modified.
pub fn fire(board: &mut Board, target: &mut Fleet, x: u8, y: u8) -> Result<FireOutcome, GameError> {
    let coord = Coord::new(x, y)?;
    if board.is_attacked(coord) {
        return Err(GameError::AlreadyAttacked);
    }
    match target.ship_at(coord) {
        None => {
            board.mark(coord, false);
            Ok(FireOutcome::Miss)
        }
        Some(ship_type) => {
            board.mark(coord, true);
            target.damage(ship_type);
            Ok(FireOutcome::Hit(ship_type))
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingPlacement(Seat),
    AttackTurn(Seat),
    Finished { winner: Seat },
}

/// Report of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volley {
    pub shooter: Seat,
    pub target: Coord,
    pub outcome: FireOutcome,
    /// The hit sank the struck ship.
    pub sunk: bool,
    /// The hit sank the last ship of the opponent's fleet.
    pub won: bool,
}

/// A two-player match. Owns both players and the turn state.
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    state: MatchState,
}

impl Match {
    /// Start a match with Player1 placing first.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            players: [Player::new(player1), Player::new(player2)],
            state: MatchState::AwaitingPlacement(Seat::Player1),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat expected to act next, or `None` once finished.
    pub fn active_seat(&self) -> Option<Seat> {
        match self.state {
            MatchState::AwaitingPlacement(s) | MatchState::AttackTurn(s) => Some(s),
            MatchState::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            MatchState::Finished { winner } => Some(self.player(winner)),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, MatchState::Finished { .. })
    }

    /// Ship type the placing player must place next.
    pub fn next_ship(&self) -> Option<ShipType> {
        match self.state {
            MatchState::AwaitingPlacement(seat) => self.player(seat).fleet().next_unplaced(),
            _ => None,
        }
    }

    /// Place the next ship for the player whose placement turn it is.
    ///
    /// The ship type follows the fixed fleet order. Once a player's fleet is
    /// complete the match moves on to the other player's placement, then to
    /// Player1's first attack.
    pub fn place_ship(
        &mut self,
        x: u8,
        y: u8,
        orientation: Orientation,
    ) -> Result<Ship, GameError> {
        let seat = match self.state {
            MatchState::AwaitingPlacement(seat) => seat,
            _ => {
                log::trace!("placement rejected in state {:?}", self.state);
                return Err(GameError::WrongPhase);
            }
        };
        let anchor = Coord::new(x, y)?;
        let fleet = self.players[seat.index()].fleet_mut();
        let ship_type = fleet.next_unplaced().ok_or(GameError::WrongPhase)?;
        let ship = *fleet.place(Placement::new(ship_type, anchor, orientation))?;

        if fleet.is_complete() {
            self.state = match seat {
                Seat::Player1 => MatchState::AwaitingPlacement(Seat::Player2),
                Seat::Player2 => MatchState::AttackTurn(Seat::Player1),
            };
            log::debug!("{:?} fleet complete, now {:?}", seat, self.state);
        }
        Ok(ship)
    }

    /// Fire at (`x`, `y`) as the player whose attack turn it is.
    pub fn fire(&mut self, x: u8, y: u8) -> Result<Volley, GameError> {
        let shooter = match self.state {
            MatchState::AttackTurn(seat) => seat,
            _ => {
                log::trace!("fire rejected in state {:?}", self.state);
                return Err(GameError::WrongPhase);
            }
        };
        let [p1, p2] = &mut self.players;
        let (firing, opponent) = match shooter {
            Seat::Player1 => (p1, p2),
            Seat::Player2 => (p2, p1),
        };

        let outcome = fire(firing.board_mut(), opponent.fleet_mut(), x, y)?;
        let target = Coord::new(x, y)?;
        log::debug!("{} fires at {}: {:?}", firing.nickname(), target, outcome);

        let mut volley = Volley {
            shooter,
            target,
            outcome,
            sunk: false,
            won: false,
        };
        if let FireOutcome::Hit(ship_type) = outcome {
            volley.sunk = opponent
                .fleet()
                .ship(ship_type)
                .is_some_and(Ship::is_sunk);
            if volley.sunk {
                log::info!("{} sank {}'s {}", firing.nickname(), opponent.nickname(), ship_type);
            }
            volley.won = opponent.fleet().all_sunk();
        }

        self.state = if volley.won {
            log::info!("{} wins", firing.nickname());
            MatchState::Finished { winner: shooter }
        } else {
            MatchState::AttackTurn(shooter.other())
        };
        Ok(volley)
    }

    /// Opponent ship type under `coord`, revealed only where `viewer` has
    /// already scored a hit.
    pub fn revealed_ship_at(&self, viewer: Seat, coord: Coord) -> Option<ShipType> {
        if self.player(viewer).board().cell(coord) != AttackCell::Hit {
            return None;
        }
        self.player(viewer.other()).fleet().ship_at(coord)
    }
}
