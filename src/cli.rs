#![cfg(feature = "std")]
//! Terminal driver: prompts, input parsing and the hot-seat game loop.

use std::io::{BufRead, Write};
use std::string::String;

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use crate::{
    common::FireOutcome,
    game::{Match, MatchState, Seat, Volley},
    ship::Orientation,
    ui,
};

/// Lines printed to push the previous player's view off screen.
const CLEAR_LINES: usize = 100;

/// Parse a target such as `B7` into raw (x, y) = (7, 2).
///
/// Only the syntax is checked here; a row letter past `J` or a column past
/// `10` is reported by the engine as out of bounds.
pub fn parse_target(input: &str) -> Option<(u8, u8)> {
    let input = input.trim();
    let mut chars = input.chars();
    let row = chars.next()?.to_ascii_uppercase();
    if !row.is_ascii_uppercase() {
        return None;
    }
    let col: u8 = chars.as_str().trim().parse().ok()?;
    Some((col, row as u8 - b'A' + 1))
}

/// Parse a direction name or its first letter.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "north" | "n" => Some(Orientation::North),
        "south" | "s" => Some(Orientation::South),
        "east" | "e" => Some(Orientation::East),
        "west" | "w" => Some(Orientation::West),
        _ => None,
    }
}

/// Driver options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub player1: Option<String>,
    pub player2: Option<String>,
    /// Wait for Enter and clear the screen when the turn changes.
    pub pause: bool,
}

/// Runs a match over a pair of text streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    rng: SmallRng,
    pause: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, rng: SmallRng, pause: bool) -> Self {
        Self {
            input,
            output,
            rng,
            pause,
        }
    }

    /// Consume the console and hand back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if n == 0 {
            bail!("input closed before the match finished");
        }
        Ok(line.trim().to_string())
    }

    fn ask_nickname(&mut self, number: u8) -> anyhow::Result<String> {
        loop {
            writeln!(self.output, "What is Player {}'s name?", number)?;
            let name = self.read_line()?;
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    fn hand_over(&mut self, game: &Match, seat: Seat) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "It is now {}'s turn!",
            game.player(seat).nickname()
        )?;
        if self.pause {
            writeln!(self.output, "Press Enter to Continue.")?;
            self.read_line()?;
            for _ in 0..CLEAR_LINES {
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    /// Collect names, run both placement phases and the attack phase.
    /// Returns the finished match.
    pub fn run(&mut self, settings: &Settings) -> anyhow::Result<Match> {
        let player1 = match &settings.player1 {
            Some(name) => name.clone(),
            None => self.ask_nickname(1)?,
        };
        let player2 = match &settings.player2 {
            Some(name) => name.clone(),
            None => self.ask_nickname(2)?,
        };
        let mut game = Match::new(player1, player2);

        let mut current = None;
        while let MatchState::AwaitingPlacement(seat) = game.state() {
            if current != Some(seat) {
                self.hand_over(&game, seat)?;
                current = Some(seat);
            }
            self.place_next(&mut game, seat)?;
        }

        while let MatchState::AttackTurn(seat) = game.state() {
            self.hand_over(&game, seat)?;
            write!(self.output, "{}", ui::render_turn(&game, seat))?;
            writeln!(self.output, "Where would you like to shoot?")?;
            let volley = self.take_shot(&mut game)?;
            self.report(&game, &volley)?;
        }

        if let Some(winner) = game.winner() {
            log::info!("match finished, winner {}", winner.nickname());
        }
        Ok(game)
    }

    fn place_next(&mut self, game: &mut Match, seat: Seat) -> anyhow::Result<()> {
        let Some(ship_type) = game.next_ship() else {
            return Ok(());
        };
        write!(self.output, "{}", ui::render_fleet(game.player(seat)))?;
        writeln!(
            self.output,
            "Where is your {} (length {})? Enter a cell like A1, or nothing for a random spot.",
            ship_type,
            ship_type.length()
        )?;
        let line = self.read_line()?;

        if line.is_empty() {
            let p = game
                .player(seat)
                .fleet()
                .random_placement(&mut self.rng, ship_type)?;
            game.place_ship(p.anchor.x(), p.anchor.y(), p.orientation)?;
            writeln!(
                self.output,
                "Placed {} at {} facing {:?}.",
                ship_type, p.anchor, p.orientation
            )?;
            return Ok(());
        }

        let Some((x, y)) = parse_target(&line) else {
            writeln!(self.output, "Please enter coordinates in the format A1!")?;
            return Ok(());
        };
        writeln!(
            self.output,
            "What direction does your ship go (north, south, east, west)?"
        )?;
        let Some(orientation) = parse_orientation(&self.read_line()?) else {
            writeln!(self.output, "Please enter a valid direction!")?;
            return Ok(());
        };
        writeln!(self.output, "Is this correct?")?;
        let answer = self.read_line()?;
        if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
            return Ok(());
        }
        if let Err(e) = game.place_ship(x, y, orientation) {
            writeln!(self.output, "{}!", e)?;
        }
        Ok(())
    }

    fn take_shot(&mut self, game: &mut Match) -> anyhow::Result<Volley> {
        loop {
            let line = self.read_line()?;
            let Some((x, y)) = parse_target(&line) else {
                writeln!(self.output, "Please enter coordinates in the format A1!")?;
                continue;
            };
            match game.fire(x, y) {
                Ok(volley) => return Ok(volley),
                Err(e) => writeln!(self.output, "{}!", e)?,
            }
        }
    }

    fn report(&mut self, game: &Match, volley: &Volley) -> anyhow::Result<()> {
        let opponent = game.player(volley.shooter.other()).nickname();
        match volley.outcome {
            FireOutcome::Miss => writeln!(self.output, "Miss")?,
            FireOutcome::Hit(ship_type) => {
                writeln!(self.output, "You hit {}'s {}!", opponent, ship_type)?;
                if volley.won {
                    writeln!(
                        self.output,
                        "You sunk {}'s {} and won!",
                        opponent, ship_type
                    )?;
                } else if volley.sunk {
                    writeln!(self.output, "You sunk {}'s {}!", opponent, ship_type)?;
                }
            }
        }
        Ok(())
    }
}
