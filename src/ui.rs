#![cfg(feature = "std")]
//! Text rendering of boards. Everything returns a `String`; printing is left
//! to the console.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{AttackCell, Board},
    config::BOARD_SIZE,
    coord::Coord,
    game::{Match, Seat},
    player::Player,
};

const CELL_RULE: &str = "+-----";
const GAP: &str = "      ";

fn header(out: &mut String) {
    out.push_str("     ");
    for x in 1..=BOARD_SIZE {
        let _ = write!(out, "{:^6}", x);
    }
}

fn rule(out: &mut String) {
    out.push_str("     ");
    for _ in 0..BOARD_SIZE {
        out.push_str(CELL_RULE);
    }
    out.push('+');
}

fn row(out: &mut String, y: u8, cell: impl Fn(Coord) -> char) {
    let _ = write!(out, "  {}  ", (b'A' + y - 1) as char);
    for x in 1..=BOARD_SIZE {
        // Coordinates come from the board range.
        let ch = Coord::new(x, y).map(&cell).unwrap_or(' ');
        let _ = write!(out, "|  {}  ", ch);
    }
    out.push('|');
}

/// Marker for a cell of the shots grid.
fn shot_char(game: &Match, viewer: Seat, coord: Coord) -> char {
    match game.player(viewer).board().cell(coord) {
        AttackCell::Hit => game
            .revealed_ship_at(viewer, coord)
            .map(|t| t.symbol().to_ascii_lowercase())
            .unwrap_or('X'),
        AttackCell::Miss => 'O',
        AttackCell::NotAttacked => ' ',
    }
}

/// Marker for a cell of a player's own ship grid, with incoming shots on top.
fn fleet_char(player: &Player, incoming: Option<&Board>, coord: Coord) -> char {
    match incoming.map(|b| b.cell(coord)) {
        Some(AttackCell::Hit) => 'X',
        Some(AttackCell::Miss) => 'O',
        _ => player
            .fleet()
            .ship_at(coord)
            .map(|t| t.symbol())
            .unwrap_or(' '),
    }
}

/// The player's own ships, used during placement.
pub fn render_fleet(player: &Player) -> String {
    let mut out = String::new();
    header(&mut out);
    out.push('\n');
    for y in 1..=BOARD_SIZE {
        rule(&mut out);
        out.push('\n');
        row(&mut out, y, |c| fleet_char(player, None, c));
        out.push('\n');
    }
    rule(&mut out);
    out.push('\n');
    out
}

/// Shots fired (left) next to the player's own fleet under fire (right).
///
/// Hits on the left show the struck ship's letter in lower case.
pub fn render_turn(game: &Match, seat: Seat) -> String {
    let me = game.player(seat);
    let opponent = game.player(seat.other());
    let mut out = String::new();

    let _ = writeln!(out, "{:<65}{}Your fleet", "Your shots", GAP);
    header(&mut out);
    out.push_str(GAP);
    header(&mut out);
    out.push('\n');
    for y in 1..=BOARD_SIZE {
        rule(&mut out);
        out.push_str(GAP);
        rule(&mut out);
        out.push('\n');
        row(&mut out, y, |c| shot_char(game, seat, c));
        out.push_str(GAP);
        row(&mut out, y, |c| fleet_char(me, Some(opponent.board()), c));
        out.push('\n');
    }
    rule(&mut out);
    out.push_str(GAP);
    rule(&mut out);
    out.push('\n');
    let _ = writeln!(
        out,
        "Shots: {} (hits {})   Ships afloat: you {}, {} {}",
        me.board().shots(),
        me.board().hits(),
        me.fleet().remaining(),
        opponent.nickname(),
        opponent.fleet().remaining(),
    );
    out
}
